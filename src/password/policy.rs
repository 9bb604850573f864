//! Password policy and candidate validation.

use super::CharacterSet;
use serde::{Deserialize, Serialize};

/// Declarative constraints a generated password must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPolicy {
    /// Target password length in characters.
    pub length: usize,
    /// Enabled character classes.
    pub charset: CharacterSet,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            length: 16,
            charset: CharacterSet::default(),
        }
    }
}

impl PasswordPolicy {
    /// Creates a policy with the given length and character set.
    pub fn new(length: usize, charset: CharacterSet) -> Self {
        Self { length, charset }
    }

    /// Checks a candidate against the policy.
    ///
    /// Valid iff the candidate meets the target length and every
    /// *enabled* class appears at least once. Disabled classes are
    /// never checked, so a character shared with a disabled class's
    /// slice cannot invalidate a candidate. The scan exits as soon as
    /// all enabled classes have been observed.
    pub fn is_satisfied_by(&self, candidate: &[u8]) -> bool {
        if candidate.len() < self.length {
            return false;
        }

        let slices = self.charset.enabled_slices();
        let mut seen = vec![false; slices.len()];
        let mut remaining = slices.len();

        for &ch in candidate {
            for (i, slice) in slices.iter().enumerate() {
                if !seen[i] && slice.contains(&ch) {
                    seen[i] = true;
                    remaining -= 1;
                    break;
                }
            }
            if remaining == 0 {
                return true;
            }
        }

        remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_classes(length: usize) -> PasswordPolicy {
        PasswordPolicy::new(length, CharacterSet::default())
    }

    #[test]
    fn test_all_classes_present_accepted() {
        assert!(all_classes(8).is_satisfied_by(b"Aa1!Aa1!"));
    }

    #[test]
    fn test_missing_class_rejected() {
        // No numeric character
        assert!(!all_classes(8).is_satisfied_by(b"Aa!!Aa!!"));
    }

    #[test]
    fn test_short_candidate_rejected() {
        assert!(!all_classes(8).is_satisfied_by(b"Aa1!"));
    }

    #[test]
    fn test_disabled_class_never_required() {
        let policy = PasswordPolicy::new(
            4,
            CharacterSet {
                uppercase: true,
                lowercase: true,
                numeric: false,
                symbol: false,
            },
        );

        // No digits or symbols present, and none required
        assert!(policy.is_satisfied_by(b"AbCd"));
    }

    #[test]
    fn test_disabled_class_characters_do_not_invalidate() {
        let policy = PasswordPolicy::new(
            4,
            CharacterSet {
                uppercase: true,
                lowercase: false,
                numeric: false,
                symbol: false,
            },
        );

        // A symbol in the candidate is ignored, not rejected
        assert!(policy.is_satisfied_by(b"AB!C"));
    }

    #[test]
    fn test_longer_than_target_accepted() {
        assert!(all_classes(4).is_satisfied_by(b"Aa1!xxxx"));
    }

    #[test]
    fn test_zero_length_candidate_with_enabled_classes() {
        // Enabled classes can never be satisfied by an empty string
        assert!(!all_classes(0).is_satisfied_by(b""));
    }
}
