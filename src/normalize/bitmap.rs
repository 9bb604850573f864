//! Fixed-size binary bitmap derived from an image.

use super::MATRIX_SIZE;

/// A 64x64 grid of single-bit values, stored row-major one byte per
/// cell (0 or 1).
///
/// This is the output of normalization and the input to hashing. The
/// matrix is immutable once built; the byte-per-cell layout is part of
/// the digest contract, so an all-dark image hashes as 4096 zero bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct BinaryMatrix {
    cells: Vec<u8>,
}

impl BinaryMatrix {
    /// Creates an all-zero matrix.
    pub(crate) fn zeroed() -> Self {
        Self {
            cells: vec![0u8; MATRIX_SIZE * MATRIX_SIZE],
        }
    }

    /// Sets the cell at (x, y). Only `normalize` writes cells.
    pub(crate) fn set(&mut self, x: usize, y: usize, bit: bool) {
        self.cells[y * MATRIX_SIZE + x] = bit as u8;
    }

    /// Returns the cell at (x, y) as a bool.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[y * MATRIX_SIZE + x] != 0
    }

    /// Returns the row-major cell bytes (one byte per cell, 0 or 1).
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.cells
    }

    /// Counts the number of set cells.
    pub fn popcount(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }

    /// Returns a copy with the single cell at (x, y) flipped.
    ///
    /// Used by the avalanche tests; not part of the derivation path.
    pub fn with_flipped(&self, x: usize, y: usize) -> Self {
        let mut copy = self.clone();
        copy.cells[y * MATRIX_SIZE + x] ^= 1;
        copy
    }
}

impl std::fmt::Debug for BinaryMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinaryMatrix")
            .field("size", &MATRIX_SIZE)
            .field("popcount", &self.popcount())
            .finish()
    }
}
