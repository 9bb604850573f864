//! Spritepass Library
//!
//! Derives reproducible, policy-compliant passwords from raster
//! images, using the images' pixel content as an entropy source.
//!
//! # Architecture
//!
//! The derivation is an explicit, synchronous chain:
//!
//! ```text
//! normalize → digest → stream → password
//!   (bitmap)   (root)  (indices)  (policy loop)
//! ```
//!
//! Each image is rescaled to a 64x64 binary bitmap, hashed into a
//! 32-byte digest, and the per-image digests are XOR-combined and
//! re-hashed into a single root digest. The root seeds a deterministic
//! index stream that draws characters from a flag-selected alphabet
//! until a candidate satisfies the policy (bounded at 100 attempts).
//!
//! # Design Principles
//!
//! - **Deterministic by default**: identical images and policy always
//!   yield identical passwords; system randomness only on request
//! - **Uses standard primitives**: BLAKE3/SHA-256 digests, ChaCha20
//!   index stream
//! - **Fails loudly**: empty inputs, empty alphabets, and exhausted
//!   retry budgets are typed errors, never silent fallbacks
//! - **Not a vault**: no storage, and no protection against an
//!   adversary holding the source image
//!
//! # Example
//!
//! ```
//! use spritepass::{
//!     normalize::PixelBuffer,
//!     password::{CharacterSet, PasswordPolicy},
//!     pipeline::Pipeline,
//! };
//!
//! // A 2x2 all-black image (RGBA) as the entropy source
//! let image = PixelBuffer::new(vec![0u8; 2 * 2 * 4], 2, 2);
//!
//! let pipeline = Pipeline::default();
//! let policy = PasswordPolicy::new(12, CharacterSet::default());
//!
//! let password = pipeline.derive_password(&[image], &policy).unwrap();
//! assert_eq!(password.len(), 12);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod config;
pub mod digest;
pub mod normalize;
pub mod password;
pub mod pipeline;
pub mod source;
pub mod stream;

// Re-export commonly used types at crate root
pub use digest::{Digest, DigestError, HashAlgorithm, Hasher};
pub use normalize::{BinaryMatrix, Normalizer, PixelBuffer};
pub use password::{CharacterSet, GeneratedPassword, PasswordPolicy, SynthesisError};
pub use pipeline::{Pipeline, PipelineError};
pub use source::{ImageSource, PatternSource};
pub use stream::{IndexStream, SeedMode};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
