use std::path::PathBuf;

use thiserror::Error;

/// Failures while assembling a [`HomeConfig`](crate::HomeConfig).
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// The config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The config file is not valid TOML for the expected schema.
    #[error("invalid config file {path}: {source}")]
    Parse {
        /// File that failed to parse.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
    /// An environment override held an unusable value.
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidEnv {
        /// Variable name.
        key: &'static str,
        /// Raw value as found in the environment.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
    /// The merged configuration violates a guard rail.
    #[error("invalid configuration: {0}")]
    Invalid(String),
    /// The `.env` file exists but could not be parsed.
    #[error("failed to load .env: {0}")]
    Dotenv(#[from] dotenvy::Error),
}
