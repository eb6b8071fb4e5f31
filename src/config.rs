//! Engine configuration.
//!
//! Configuration is a plain value passed to
//! [`Workspace::init`](crate::workspace::Workspace::init). Hosts either build
//! it in code from one of the presets or parse a JSON document in which every
//! field is optional.
//!
//! # Examples
//!
//! ```
//! use taskdeck::config::EngineConfig;
//!
//! let config = EngineConfig::default();
//! assert!(config.seed_sample_data);
//!
//! let parsed = EngineConfig::from_json(r#"{ "seedSampleData": false }"#)
//!     .expect("valid configuration");
//! assert!(!parsed.seed_sample_data);
//! assert_eq!(parsed.max_title_length, config.max_title_length);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Argon2id cost parameters for credential hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CredentialConfig {
    /// Memory cost in KiB.
    pub memory_kib: u32,
    /// Number of passes.
    pub iterations: u32,
    /// Degree of parallelism.
    pub parallelism: u32,
}

impl Default for CredentialConfig {
    fn default() -> Self {
        Self {
            memory_kib: argon2::Params::DEFAULT_M_COST,
            iterations: argon2::Params::DEFAULT_T_COST,
            parallelism: argon2::Params::DEFAULT_P_COST,
        }
    }
}

impl CredentialConfig {
    /// Returns the cheapest parameters Argon2 accepts.
    ///
    /// Intended for tests and demos only.
    #[must_use]
    pub const fn lightweight() -> Self {
        Self {
            memory_kib: argon2::Params::MIN_M_COST,
            iterations: argon2::Params::MIN_T_COST,
            parallelism: argon2::Params::MIN_P_COST,
        }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Whether absent user and task collections are seeded with sample data.
    pub seed_sample_data: bool,
    /// Credential hashing parameters.
    pub credentials: CredentialConfig,
    /// Maximum task title length in characters, after trimming.
    pub max_title_length: usize,
    /// Maximum comment length in characters, after trimming.
    pub max_comment_length: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed_sample_data: true,
            credentials: CredentialConfig::default(),
            max_title_length: 200,
            max_comment_length: 2_000,
        }
    }
}

impl EngineConfig {
    /// Creates a configuration with minimal hashing cost.
    ///
    /// Useful for tests, where many users are hashed in quick succession.
    #[must_use]
    pub fn lightweight() -> Self {
        Self {
            credentials: CredentialConfig::lightweight(),
            ..Self::default()
        }
    }

    /// Creates a lightweight configuration that never generates sample data.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            seed_sample_data: false,
            ..Self::lightweight()
        }
    }

    /// Parses a JSON configuration document.
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is not valid JSON or a
    /// field has the wrong type.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(document).map_err(|err| ConfigError::Parse(err.to_string()))
    }
}

/// Errors returned while loading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration document could not be parsed.
    #[error("invalid engine configuration: {0}")]
    Parse(String),
}
