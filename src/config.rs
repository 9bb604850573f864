//! TOML-file configuration for the derivation binary.
//!
//! The core consumes fully-resolved [`PasswordPolicy`] values; this
//! layer maps a config file onto them so invocations can share policy
//! presets without repeating flags.

use crate::digest::HashAlgorithm;
use crate::password::{CharacterSet, PasswordPolicy};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid password length (must be positive)")]
    InvalidLength,
    #[error("no character class enabled")]
    NoClassesEnabled,
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Hash algorithm selection as it appears in config files.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashChoice {
    #[default]
    Blake3,
    Sha256,
}

impl From<HashChoice> for HashAlgorithm {
    fn from(choice: HashChoice) -> Self {
        match choice {
            HashChoice::Blake3 => HashAlgorithm::Blake3,
            HashChoice::Sha256 => HashAlgorithm::Sha256,
        }
    }
}

/// Derivation settings beyond the policy itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DerivationConfig {
    /// Number of passwords to derive per invocation.
    pub count: usize,
    /// Hash algorithm for the digest engine.
    pub hash: HashChoice,
}

impl Default for DerivationConfig {
    fn default() -> Self {
        Self {
            count: 1,
            hash: HashChoice::default(),
        }
    }
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub policy: PasswordPolicy,
    #[serde(default)]
    pub derivation: DerivationConfig,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        let config: FileConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the resolved configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.policy.length == 0 {
            return Err(ConfigError::InvalidLength);
        }
        if self.policy.charset.is_empty() {
            return Err(ConfigError::NoClassesEnabled);
        }
        Ok(())
    }
}

/// Named complexity presets mapping to character set combinations.
///
/// Preset resolution lives outside the core; the synthesizer only ever
/// sees the resolved flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplexityPreset {
    /// Lowercase only.
    Simple,
    /// Letters and digits.
    Alphanumeric,
    /// All four classes.
    Full,
}

impl ComplexityPreset {
    /// Resolves the preset to concrete character set flags.
    pub fn charset(&self) -> CharacterSet {
        match self {
            ComplexityPreset::Simple => CharacterSet {
                uppercase: false,
                lowercase: true,
                numeric: false,
                symbol: false,
            },
            ComplexityPreset::Alphanumeric => CharacterSet {
                uppercase: true,
                lowercase: true,
                numeric: true,
                symbol: false,
            },
            ComplexityPreset::Full => CharacterSet::default(),
        }
    }

    /// Resolves a preset name as used on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "simple" => Some(ComplexityPreset::Simple),
            "alphanumeric" => Some(ComplexityPreset::Alphanumeric),
            "full" => Some(ComplexityPreset::Full),
            _ => None,
        }
    }

    /// Builds a policy from the preset and a target length.
    pub fn policy(&self, length: usize) -> PasswordPolicy {
        PasswordPolicy::new(length, self.charset())
    }
}
