//! XOR combination and finalization of per-image digests.
//!
//! XOR is commutative and associative, so per-image digests can be
//! combined in any order (or in parallel) without changing the root.
//! XOR of related hash outputs can retain partial structure, so the
//! combined value is re-hashed before use as seed material.

use super::{Digest, Hasher, DIGEST_LEN};
use crate::normalize::BinaryMatrix;
use thiserror::Error;

/// Errors raised by digest combination.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DigestError {
    #[error("no digests to combine")]
    EmptyInput,
    #[error("digest length mismatch: expected {expected}, got {got}")]
    LengthMismatch { expected: usize, got: usize },
    #[error("no input bitmaps supplied")]
    NoInputs,
}

/// XORs byte sequences position-wise.
///
/// All inputs must share the first sequence's length. A single fixed
/// hash algorithm makes a mismatch unreachable in the derivation path,
/// but the check stays in as a guard.
pub fn combine_bytes(inputs: &[&[u8]]) -> Result<Vec<u8>, DigestError> {
    let first = inputs.first().ok_or(DigestError::EmptyInput)?;

    let mut combined = first.to_vec();
    for input in &inputs[1..] {
        if input.len() != combined.len() {
            return Err(DigestError::LengthMismatch {
                expected: combined.len(),
                got: input.len(),
            });
        }
        for (acc, byte) in combined.iter_mut().zip(input.iter()) {
            *acc ^= byte;
        }
    }

    Ok(combined)
}

/// Combines digests by position-wise XOR.
///
/// A single-element combination returns the digest unchanged.
pub fn combine(digests: &[Digest]) -> Result<Digest, DigestError> {
    let slices: Vec<&[u8]> = digests.iter().map(|d| d.as_bytes().as_slice()).collect();
    let combined = combine_bytes(&slices)?;

    let mut data = [0u8; DIGEST_LEN];
    data.copy_from_slice(&combined);
    Ok(Digest::from_bytes(data))
}

/// Re-hashes a combined digest to restore full avalanche behavior.
pub fn finalize(hasher: &Hasher, combined: &Digest) -> Digest {
    hasher.hash(combined.as_bytes())
}

/// Derives the root digest for a set of normalized bitmaps.
///
/// Hashes each matrix, XOR-combines the per-image digests, then
/// finalizes. Fails with [`DigestError::NoInputs`] on an empty set.
pub fn root_digest(hasher: &Hasher, matrices: &[BinaryMatrix]) -> Result<Digest, DigestError> {
    if matrices.is_empty() {
        return Err(DigestError::NoInputs);
    }

    let digests: Vec<Digest> = matrices.iter().map(|m| hasher.hash_matrix(m)).collect();
    let combined = combine(&digests)?;
    let root = finalize(hasher, &combined);

    tracing::debug!(images = matrices.len(), "Derived root digest");

    Ok(root)
}
