//! Seed-state derivation for the index stream.

use rand_core::RngCore;

/// Generator seed-state length in bytes (ChaCha20 key size).
pub const SEED_LEN: usize = 32;

/// How the index stream's seed state is obtained.
///
/// Chosen once before the stream is constructed, not threaded through
/// every call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeedMode {
    /// Seed from the image-derived digest bytes; fully reproducible.
    #[default]
    Deterministic,
    /// Seed from the OS cryptographic random source. Explicitly
    /// requested by the caller; output is not reproducible.
    SystemRandom,
}

impl SeedMode {
    /// Resolves seed material into a fixed 32-byte seed state.
    pub(crate) fn seed_state(&self, material: &[u8]) -> [u8; SEED_LEN] {
        match self {
            SeedMode::Deterministic => fold_material(material),
            SeedMode::SystemRandom => {
                let mut state = [0u8; SEED_LEN];
                rand_core::OsRng.fill_bytes(&mut state);
                state
            }
        }
    }
}

/// Folds arbitrary-length seed material into the 32-byte seed state.
///
/// Material is consumed in 32-byte blocks, XOR-folded position-wise,
/// with the final block zero-padded. A bare 32-byte digest passes
/// through unchanged; per-index suffix bytes appended by
/// [`indexed_seed`] land in a second block and perturb the state.
fn fold_material(material: &[u8]) -> [u8; SEED_LEN] {
    let mut state = [0u8; SEED_LEN];
    for (i, &byte) in material.iter().enumerate() {
        state[i % SEED_LEN] ^= byte;
    }
    state
}

/// Builds the per-index seed for multi-password derivation: the root
/// material with the index appended as 8 little-endian bytes.
pub fn indexed_seed(root: &[u8], index: u64) -> Vec<u8> {
    let mut seed = Vec::with_capacity(root.len() + 8);
    seed.extend_from_slice(root);
    seed.extend_from_slice(&index.to_le_bytes());
    seed
}
