//! One-way hashing of bitmap bytes into fixed-size digests.

use super::DIGEST_LEN;
use crate::normalize::BinaryMatrix;
use blake3::Hasher as Blake3Hasher;
use sha2::{Digest as _, Sha256};

/// Supported hash algorithms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HashAlgorithm {
    /// BLAKE3 - fast, secure, recommended default.
    #[default]
    Blake3,
    /// SHA-256 - widely deployed, conservative choice.
    Sha256,
}

/// A fixed 32-byte cryptographic hash output.
///
/// Digests are immutable; the only operations over them are XOR
/// combination and re-hashing, both in [`super::combine`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Digest {
    data: [u8; DIGEST_LEN],
}

impl Digest {
    /// Wraps raw digest bytes. Only the hasher constructs digests.
    pub(crate) fn from_bytes(data: [u8; DIGEST_LEN]) -> Self {
        Self { data }
    }

    /// Returns the digest bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.data
    }

    /// Returns the digest length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Counts the bits that differ from another digest.
    ///
    /// Used by the avalanche tests.
    pub fn hamming_distance(&self, other: &Digest) -> u32 {
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| (a ^ b).count_ones())
            .sum()
    }
}

impl std::fmt::Debug for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Digests seed passwords; keep them out of debug logs.
        f.debug_struct("Digest").finish_non_exhaustive()
    }
}

/// Digest engine over a fixed hash algorithm.
pub struct Hasher {
    algorithm: HashAlgorithm,
}

impl Hasher {
    /// Creates a hasher with the specified algorithm.
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self { algorithm }
    }

    /// Hashes arbitrary bytes to a 32-byte digest.
    pub fn hash(&self, input: &[u8]) -> Digest {
        let data = match self.algorithm {
            HashAlgorithm::Blake3 => {
                let mut hasher = Blake3Hasher::new();
                hasher.update(input);
                *hasher.finalize().as_bytes()
            }
            HashAlgorithm::Sha256 => {
                let mut hasher = Sha256::new();
                hasher.update(input);
                let result = hasher.finalize();
                let mut data = [0u8; DIGEST_LEN];
                data.copy_from_slice(&result);
                data
            }
        };

        Digest::from_bytes(data)
    }

    /// Hashes a normalized bitmap's cell bytes.
    pub fn hash_matrix(&self, matrix: &BinaryMatrix) -> Digest {
        self.hash(matrix.as_bytes())
    }
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new(HashAlgorithm::default())
    }
}
