//! Candidate synthesis with bounded rejection sampling.
//!
//! Candidates are drawn from one ongoing index stream; an invalid
//! candidate is discarded and a fresh one drawn from the same stream
//! without re-seeding. Pathological policies (short length, many
//! required classes) can reject repeatedly, so the loop is capped and
//! exhaustion surfaces as a typed error instead of a hang.

use super::{CharacterSet, PasswordPolicy};
use crate::stream::{indexed_seed, IndexStream, SeedMode};
use thiserror::Error;

/// Regeneration attempts before a policy is declared unsatisfiable.
pub const MAX_ATTEMPTS: u32 = 100;

/// Errors raised during password synthesis.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SynthesisError {
    #[error("no character class enabled")]
    EmptyAlphabet,
    #[error("policy not satisfied after {attempts} attempts")]
    PolicyUnsatisfiable { attempts: u32 },
}

/// A successfully synthesized password.
///
/// Exists only as a return value; the `Debug` form is redacted so
/// passwords cannot leak through diagnostic logging.
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratedPassword {
    value: String,
}

impl GeneratedPassword {
    fn new(value: String) -> Self {
        Self { value }
    }

    /// Returns the password characters.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the password length in characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Returns true if the password is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl std::fmt::Display for GeneratedPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

impl std::fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratedPassword")
            .field("length", &self.value.len())
            .finish_non_exhaustive()
    }
}

/// Synthesizes one policy-compliant password from seed material.
///
/// Draws `policy.length` uniform indices over the flag-assembled
/// alphabet, validates per-class presence, and redraws from the same
/// stream until a candidate passes or [`MAX_ATTEMPTS`] is exhausted.
pub fn synthesize(
    material: &[u8],
    policy: &PasswordPolicy,
    mode: SeedMode,
) -> Result<GeneratedPassword, SynthesisError> {
    let alphabet = policy
        .charset
        .alphabet()
        .ok_or(SynthesisError::EmptyAlphabet)?;

    let mut stream = IndexStream::new(mode, material);
    synthesize_from_stream(&mut stream, &alphabet, policy)
}

fn synthesize_from_stream(
    stream: &mut IndexStream,
    alphabet: &[u8],
    policy: &PasswordPolicy,
) -> Result<GeneratedPassword, SynthesisError> {
    for attempt in 1..=MAX_ATTEMPTS {
        let mut candidate = Vec::with_capacity(policy.length);
        for _ in 0..policy.length {
            candidate.push(alphabet[stream.next_index(alphabet.len())]);
        }

        if policy.is_satisfied_by(&candidate) {
            if attempt > 1 {
                tracing::debug!(attempt, "Candidate accepted after rejections");
            }
            // Alphabet slices are ASCII, so bytes map directly to chars.
            let value = candidate.iter().map(|&b| b as char).collect();
            return Ok(GeneratedPassword::new(value));
        }
    }

    tracing::warn!(
        attempts = MAX_ATTEMPTS,
        length = policy.length,
        "Policy unsatisfiable within attempt budget"
    );
    Err(SynthesisError::PolicyUnsatisfiable {
        attempts: MAX_ATTEMPTS,
    })
}

/// Derives `count` passwords from one root seed.
///
/// Password `i` is synthesized from the root material with the 8-byte
/// little-endian encoding of `i` appended, giving decorrelated streams
/// per index while staying deterministic for a fixed (seed, count)
/// pair. Distinctness across indices is probabilistic; collisions are
/// neither detected nor rejected.
pub fn derive_many(
    material: &[u8],
    policy: &PasswordPolicy,
    count: usize,
    mode: SeedMode,
) -> Result<Vec<GeneratedPassword>, SynthesisError> {
    let mut passwords = Vec::with_capacity(count);
    for index in 0..count as u64 {
        let seed = indexed_seed(material, index);
        passwords.push(synthesize(&seed, policy, mode)?);
    }
    Ok(passwords)
}

/// Convenience check used by tests and the pipeline: does a password
/// satisfy a character set's per-class presence requirement?
pub(crate) fn satisfies_classes(password: &GeneratedPassword, charset: &CharacterSet) -> bool {
    PasswordPolicy::new(password.len(), *charset).is_satisfied_by(password.as_str().as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn all_classes(length: usize) -> PasswordPolicy {
        PasswordPolicy::new(length, CharacterSet::default())
    }

    #[test]
    fn test_deterministic_synthesis() {
        let material = [0x42u8; 32];
        let policy = all_classes(20);

        let a = synthesize(&material, &policy, SeedMode::Deterministic).unwrap();
        let b = synthesize(&material, &policy, SeedMode::Deterministic).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_length_matches_policy() {
        let password = synthesize(&[0x01; 32], &all_classes(24), SeedMode::Deterministic).unwrap();

        assert_eq!(password.len(), 24);
    }

    #[test]
    fn test_every_enabled_class_present() {
        let charset = CharacterSet::default();
        let password = synthesize(&[0x07; 32], &all_classes(12), SeedMode::Deterministic).unwrap();

        assert!(satisfies_classes(&password, &charset));
    }

    #[test]
    fn test_empty_alphabet_rejected() {
        let policy = PasswordPolicy::new(
            12,
            CharacterSet {
                uppercase: false,
                lowercase: false,
                numeric: false,
                symbol: false,
            },
        );

        assert_eq!(
            synthesize(&[0x00; 32], &policy, SeedMode::Deterministic),
            Err(SynthesisError::EmptyAlphabet)
        );
    }

    #[test]
    fn test_impossible_policy_terminates() {
        // Length 1 cannot contain all four classes; must fail within
        // the attempt budget rather than hang.
        let result = synthesize(&[0x5A; 32], &all_classes(1), SeedMode::Deterministic);

        assert_eq!(
            result,
            Err(SynthesisError::PolicyUnsatisfiable {
                attempts: MAX_ATTEMPTS
            })
        );
    }

    #[test]
    fn test_different_seeds_different_passwords() {
        let policy = all_classes(20);

        let a = synthesize(&[0x01; 32], &policy, SeedMode::Deterministic).unwrap();
        let b = synthesize(&[0x02; 32], &policy, SeedMode::Deterministic).unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn test_single_class_policy() {
        let policy = PasswordPolicy::new(
            10,
            CharacterSet {
                uppercase: false,
                lowercase: false,
                numeric: true,
                symbol: false,
            },
        );
        let password = synthesize(&[0x33; 32], &policy, SeedMode::Deterministic).unwrap();

        assert!(password.as_str().bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn test_derive_many_count_and_distinctness() {
        let material = [0x42u8; 32];
        let passwords =
            derive_many(&material, &all_classes(12), 5, SeedMode::Deterministic).unwrap();

        assert_eq!(passwords.len(), 5);
        for i in 0..passwords.len() {
            for j in (i + 1)..passwords.len() {
                assert_ne!(passwords[i], passwords[j]);
            }
        }
    }

    #[test]
    fn test_derive_many_is_deterministic() {
        let material = [0x9Cu8; 32];
        let policy = all_classes(16);

        let a = derive_many(&material, &policy, 3, SeedMode::Deterministic).unwrap();
        let b = derive_many(&material, &policy, 3, SeedMode::Deterministic).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_derive_many_zero_count() {
        let passwords =
            derive_many(&[0x00; 32], &all_classes(8), 0, SeedMode::Deterministic).unwrap();

        assert!(passwords.is_empty());
    }

    #[test]
    fn test_system_random_mode_still_compliant() {
        let charset = CharacterSet::default();
        let policy = PasswordPolicy::new(16, charset);

        let password = synthesize(&[], &policy, SeedMode::SystemRandom).unwrap();

        assert_eq!(password.len(), 16);
        assert!(satisfies_classes(&password, &charset));
    }

    proptest! {
        #[test]
        fn prop_successful_synthesis_is_policy_compliant(
            seed in proptest::collection::vec(any::<u8>(), 0..64),
            length in 8usize..32,
            uppercase: bool,
            lowercase: bool,
            numeric: bool,
            symbol: bool,
        ) {
            let charset = CharacterSet { uppercase, lowercase, numeric, symbol };
            let policy = PasswordPolicy::new(length, charset);

            match synthesize(&seed, &policy, SeedMode::Deterministic) {
                Ok(password) => {
                    prop_assert_eq!(password.len(), length);
                    prop_assert!(satisfies_classes(&password, &charset));
                }
                Err(SynthesisError::EmptyAlphabet) => prop_assert!(charset.is_empty()),
                Err(SynthesisError::PolicyUnsatisfiable { .. }) => {
                    // Possible only for pathological draws; length >= 8
                    // with at most 4 classes makes this astronomically
                    // unlikely, so treat it as a failure.
                    prop_assert!(false, "unexpected retry exhaustion");
                }
            }
        }
    }
}
