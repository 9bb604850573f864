//! Deterministic seeded index streams.
//!
//! This module expands a digest (or any byte material) into an
//! unbounded stream of uniformly distributed index values. The same
//! seed material always reproduces the same stream; an explicit
//! system-random mode trades that reproducibility for unpredictability.

mod generator;
mod seed;

pub use generator::IndexStream;
pub use seed::{indexed_seed, SeedMode, SEED_LEN};
