//! Configuration module

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Extra rules configuration
    #[serde(default)]
    pub rules: RulesFilesConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Rules files applied on top of the default ruleset
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct RulesFilesConfig {
    /// JSON or TOML rules files, loaded in order
    #[serde(default)]
    pub files: Vec<PathBuf>,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Parse a configuration document
    pub fn from_toml_str(source: &str) -> CliResult<Self> {
        toml::from_str(source).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Read and parse a configuration file
    ///
    /// Relative rules paths are resolved against the file's directory.
    pub fn load(path: &Path) -> CliResult<Self> {
        let source = fs::read_to_string(path)
            .map_err(|_| CliError::FileNotFound(path.display().to_string()))?;
        let mut config = Self::from_toml_str(&source)?;

        if let Some(base) = path.parent() {
            for file in &mut config.rules.files {
                if file.is_relative() {
                    *file = base.join(&*file);
                }
            }
        }

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}
