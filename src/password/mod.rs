//! Policy-constrained password synthesis.
//!
//! This module turns a seeded index stream into passwords over a
//! flag-selected alphabet, enforcing per-class presence through a
//! bounded rejection-sampling loop, and derives batches of independent
//! passwords from one root seed by index perturbation.

mod charset;
mod policy;
mod synth;

pub use charset::CharacterSet;
pub use policy::PasswordPolicy;
pub use synth::{derive_many, synthesize, GeneratedPassword, SynthesisError, MAX_ATTEMPTS};
pub(crate) use synth::satisfies_classes;
