//! End-to-end derivation pipeline.
//!
//! Ties the stages together: pixel buffers are normalized to binary
//! matrices, hashed and combined into a root digest, and the digest
//! seeds password synthesis. Each image is processed strictly before
//! the next; no state is shared across invocations.

use crate::digest::{root_digest, Digest, DigestError, HashAlgorithm, Hasher};
use crate::normalize::{BinaryMatrix, Normalizer, PixelBuffer};
use crate::password::{derive_many, synthesize, GeneratedPassword, PasswordPolicy, SynthesisError};
use crate::stream::SeedMode;
use thiserror::Error;

/// Errors surfaced by the pipeline.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error(transparent)]
    Digest(#[from] DigestError),
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
}

/// The full image-to-password derivation pipeline.
pub struct Pipeline {
    normalizer: Normalizer,
    hasher: Hasher,
    mode: SeedMode,
}

impl Pipeline {
    /// Creates a pipeline with the given hash algorithm and seed mode.
    pub fn new(algorithm: HashAlgorithm, mode: SeedMode) -> Self {
        Self {
            normalizer: Normalizer::new(),
            hasher: Hasher::new(algorithm),
            mode,
        }
    }

    /// Derives the root digest for a set of images.
    ///
    /// Fails with [`DigestError::NoInputs`] when no images are
    /// supplied.
    pub fn digest_images(&self, images: &[PixelBuffer]) -> Result<Digest, DigestError> {
        let matrices: Vec<BinaryMatrix> = images
            .iter()
            .map(|image| self.normalizer.normalize(image))
            .collect();
        root_digest(&self.hasher, &matrices)
    }

    /// Derives a single password from a set of images.
    pub fn derive_password(
        &self,
        images: &[PixelBuffer],
        policy: &PasswordPolicy,
    ) -> Result<GeneratedPassword, PipelineError> {
        let root = self.digest_images(images)?;
        let password = synthesize(root.as_bytes(), policy, self.mode)?;

        debug_assert!(crate::password::satisfies_classes(
            &password,
            &policy.charset
        ));
        tracing::info!(
            images = images.len(),
            length = password.len(),
            "Password derived"
        );
        Ok(password)
    }

    /// Derives `count` passwords from a set of images by seed
    /// perturbation.
    pub fn derive_passwords(
        &self,
        images: &[PixelBuffer],
        policy: &PasswordPolicy,
        count: usize,
    ) -> Result<Vec<GeneratedPassword>, PipelineError> {
        let root = self.digest_images(images)?;
        let passwords = derive_many(root.as_bytes(), policy, count, self.mode)?;

        tracing::info!(images = images.len(), count, "Password batch derived");
        Ok(passwords)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(HashAlgorithm::default(), SeedMode::Deterministic)
    }
}
