//! Rules file schema
//!
//! A TOML document describing rules to add on top of a ruleset:
//!
//! ```toml
//! uncountable = ["furniture"]
//! acronym = ["GraphQL"]
//!
//! [irregular]
//! cactus = "cacti"
//!
//! [[plural]]
//! suffix = "us"
//! replacement = "i"
//!
//! [[human]]
//! suffix = "_cnt"
//! replacement = "_count"
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{InflectError, Result};
use crate::ruleset::Ruleset;

/// Root rules file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    /// Singular → plural pairs
    #[serde(default)]
    pub irregular: BTreeMap<String, String>,
    #[serde(default)]
    pub uncountable: Vec<String>,
    #[serde(default)]
    pub acronym: Vec<String>,
    #[serde(default)]
    pub plural: Vec<SuffixRule>,
    #[serde(default)]
    pub singular: Vec<SuffixRule>,
    #[serde(default)]
    pub human: Vec<HumanRule>,
}

/// Plural or singular rule entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuffixRule {
    pub suffix: String,
    pub replacement: String,
    #[serde(default)]
    pub exact: bool,
}

/// Humanize substitution entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HumanRule {
    pub suffix: String,
    pub replacement: String,
}

impl RulesConfig {
    /// Parse a TOML rules document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Reject entries that could never match
    pub fn validate(&self) -> Result<()> {
        let suffix_rules = self
            .plural
            .iter()
            .chain(&self.singular)
            .map(|r| r.suffix.as_str());
        let human_rules = self.human.iter().map(|r| r.suffix.as_str());
        if suffix_rules.chain(human_rules).any(str::is_empty) {
            return Err(InflectError::InvalidRule(
                "rule suffix must not be empty".to_string(),
            ));
        }

        if self
            .irregular
            .iter()
            .any(|(singular, plural)| singular.is_empty() || plural.is_empty())
        {
            return Err(InflectError::InvalidRule(
                "irregular forms must not be empty".to_string(),
            ));
        }

        if self.acronym.iter().any(String::is_empty) {
            return Err(InflectError::InvalidRule(
                "acronym must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Number of entries this file registers
    pub fn len(&self) -> usize {
        self.irregular.len()
            + self.uncountable.len()
            + self.acronym.len()
            + self.plural.len()
            + self.singular.len()
            + self.human.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validate, then register every entry on `rs`
    ///
    /// Rules are added in file order, so later entries take precedence.
    /// Uncountables are registered last and win over a rule for the same
    /// word in the same file.
    pub fn apply_to(&self, rs: &mut Ruleset) -> Result<usize> {
        self.validate()?;

        for rule in &self.plural {
            rs.add_plural_exact(&rule.suffix, &rule.replacement, rule.exact);
        }
        for rule in &self.singular {
            rs.add_singular_exact(&rule.suffix, &rule.replacement, rule.exact);
        }
        for rule in &self.human {
            rs.add_human(&rule.suffix, &rule.replacement);
        }
        for (singular, plural) in &self.irregular {
            rs.add_irregular(singular, plural);
        }
        for word in &self.acronym {
            rs.add_acronym(word);
        }
        for word in &self.uncountable {
            rs.add_uncountable(word);
        }

        Ok(self.len())
    }
}
