//! Error types for rule loading
//!
//! Transformations themselves are total and never fail; only reading
//! external rule documents can.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating external rules
#[derive(Error, Debug)]
pub enum InflectError {
    /// Malformed singular/plural JSON mapping
    #[error("could not decode inflection JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// Malformed TOML rules file
    #[error("could not parse rules file: {0}")]
    Toml(#[from] toml::de::Error),

    /// Rules file could not be read
    #[error("could not read inflection file {}: {source}", path.display())]
    Io {
        /// Path that failed to read
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// A rule that can never match (empty suffix)
    #[error("invalid rule: {0}")]
    InvalidRule(String),
}

/// Result type for loading operations
pub type Result<T> = std::result::Result<T, InflectError>;
