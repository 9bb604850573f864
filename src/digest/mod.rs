//! Cryptographic digest derivation and combination.
//!
//! This module hashes normalized bitmaps into fixed 32-byte digests,
//! XOR-combines per-image digests, and re-hashes the combined result
//! so multi-image derivation keeps full avalanche behavior.

mod combine;
mod hash;

pub use combine::{combine, finalize, root_digest, DigestError};
pub use hash::{Digest, HashAlgorithm, Hasher};

/// Digest length in bytes (both BLAKE3 and SHA-256).
pub const DIGEST_LEN: usize = 32;
