//! Uniform index stream backed by a seeded ChaCha20 generator.

use super::seed::SeedMode;
use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};

/// An unbounded stream of uniformly distributed index values.
///
/// Each stream owns an independent generator instance; nothing is
/// shared across callers. Indices are produced by threshold rejection
/// sampling over raw 32-bit draws, so every value in [0, n) is equally
/// likely regardless of n.
pub struct IndexStream {
    inner: ChaCha20Rng,
    /// Raw 32-bit draws consumed, including rejected ones.
    draws: u64,
}

impl IndexStream {
    /// Creates a stream from seed material under the given mode.
    pub fn new(mode: SeedMode, material: &[u8]) -> Self {
        let state = mode.seed_state(material);
        tracing::trace!(?mode, "Index stream seeded");
        Self {
            inner: ChaCha20Rng::from_seed(state),
            draws: 0,
        }
    }

    /// Creates a stream from a known seed state (for testing only).
    #[cfg(test)]
    pub(crate) fn from_state_for_testing(state: [u8; 32]) -> Self {
        Self {
            inner: ChaCha20Rng::from_seed(state),
            draws: 0,
        }
    }

    /// Returns the next uniform index in [0, n).
    ///
    /// Draws above the largest multiple of n are rejected rather than
    /// folded, which would bias low indices.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero or exceeds `u32::MAX`. Callers guard the
    /// zero case via their own alphabet validation.
    pub fn next_index(&mut self, n: usize) -> usize {
        assert!(n > 0, "index range must be non-empty");
        let n = u32::try_from(n).expect("index range exceeds u32");
        let threshold = (u32::MAX / n) * n;

        loop {
            let draw = self.inner.next_u32();
            self.draws += 1;
            if draw < threshold {
                return (draw % n) as usize;
            }
        }
    }

    /// Returns the number of raw draws consumed so far.
    pub fn draw_count(&self) -> u64 {
        self.draws
    }
}

impl std::fmt::Debug for IndexStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexStream")
            .field("draws", &self.draws)
            .finish_non_exhaustive()
    }
}
