//! Character class flags and alphabet assembly.

use serde::{Deserialize, Serialize};

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const NUMERIC: &[u8] = b"0123456789";
const SYMBOL: &[u8] = b"!@#$%^&*()-_=+[]{}:;,.<>?";

/// The four independent character class flags.
///
/// Each flag maps to a disjoint static alphabet slice. At least one
/// flag must be enabled before an alphabet can be derived; an
/// all-disabled set is a configuration error, never a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSet {
    /// Include A-Z.
    pub uppercase: bool,
    /// Include a-z.
    pub lowercase: bool,
    /// Include 0-9.
    pub numeric: bool,
    /// Include punctuation symbols.
    pub symbol: bool,
}

impl Default for CharacterSet {
    fn default() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            numeric: true,
            symbol: true,
        }
    }
}

impl CharacterSet {
    /// Returns true if no class is enabled.
    pub fn is_empty(&self) -> bool {
        !(self.uppercase || self.lowercase || self.numeric || self.symbol)
    }

    /// Returns the enabled alphabet slices in fixed order
    /// (uppercase, lowercase, numeric, symbol).
    pub(crate) fn enabled_slices(&self) -> Vec<&'static [u8]> {
        let mut slices = Vec::with_capacity(4);
        if self.uppercase {
            slices.push(UPPERCASE);
        }
        if self.lowercase {
            slices.push(LOWERCASE);
        }
        if self.numeric {
            slices.push(NUMERIC);
        }
        if self.symbol {
            slices.push(SYMBOL);
        }
        slices
    }

    /// Concatenates the enabled slices into the drawing alphabet.
    ///
    /// Returns `None` for an all-disabled set; the synthesizer maps
    /// that to its terminal configuration error.
    pub(crate) fn alphabet(&self) -> Option<Vec<u8>> {
        let slices = self.enabled_slices();
        if slices.is_empty() {
            return None;
        }
        Some(slices.concat())
    }
}
