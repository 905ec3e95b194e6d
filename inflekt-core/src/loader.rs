//! Loading extra rules from external documents
//!
//! Two formats are accepted: a flat JSON object of singular → plural pairs
//! (`inflections.json`) and a TOML rules file (see [`RulesConfig`]).
//! Documents are decoded completely before any rule is registered, so a
//! malformed document never leaves a ruleset half-updated.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::config::RulesConfig;
use crate::error::{InflectError, Result};
use crate::ruleset::Ruleset;

/// Environment variable overriding the bootstrap rules path
pub const INFLECT_PATH_ENV: &str = "INFLECT_PATH";

/// File looked up in the working directory when the variable is unset
pub const DEFAULT_FILE_NAME: &str = "inflections.json";

/// Path the default ruleset loads extra irregulars from
pub fn default_rules_path() -> PathBuf {
    match env::var_os(INFLECT_PATH_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => env::current_dir()
            .unwrap_or_default()
            .join(DEFAULT_FILE_NAME),
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

impl Ruleset {
    /// Register every singular → plural pair of a JSON object as irregular
    ///
    /// Returns the number of pairs registered.
    pub fn load_reader<R: Read>(&mut self, reader: R) -> Result<usize> {
        let pairs: BTreeMap<String, String> = serde_json::from_reader(reader)?;
        Ok(self.register_irregulars(&pairs))
    }

    /// Same as [`Ruleset::load_reader`] for an in-memory document
    pub fn load_str(&mut self, json: &str) -> Result<usize> {
        let pairs: BTreeMap<String, String> = serde_json::from_str(json)?;
        Ok(self.register_irregulars(&pairs))
    }

    /// Apply a TOML rules document
    pub fn load_toml_str(&mut self, source: &str) -> Result<usize> {
        RulesConfig::from_toml_str(source)?.apply_to(self)
    }

    /// Load a rules file, choosing the format by extension
    ///
    /// `.toml` files are rules files; anything else is read as the flat
    /// JSON mapping.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| InflectError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let count = if is_toml(path) {
            self.load_toml_str(&source)?
        } else {
            self.load_str(&source)?
        };
        log::debug!("loaded {count} inflection entries from {}", path.display());
        Ok(count)
    }

    fn register_irregulars(&mut self, pairs: &BTreeMap<String, String>) -> usize {
        let mut registered = 0;
        for (singular, plural) in pairs {
            if singular.is_empty() || plural.is_empty() {
                log::warn!("skipping empty irregular pair {singular:?} -> {plural:?}");
                continue;
            }
            self.add_irregular(singular, plural);
            registered += 1;
        }
        registered
    }
}
