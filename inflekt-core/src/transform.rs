//! Named single-argument transformations

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Every transformation that takes just a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Transform {
    Pluralize,
    Singularize,
    Capitalize,
    Camelize,
    CamelizeDownFirst,
    Titleize,
    Underscore,
    Dasherize,
    Humanize,
    ForeignKey,
    ForeignKeyCondensed,
    ForeignKeyToAttribute,
    Tableize,
    Typeify,
    Parameterize,
    Asciify,
    Ordinalize,
}

impl Transform {
    /// All transformations, in display order
    pub const ALL: [Transform; 17] = [
        Transform::Pluralize,
        Transform::Singularize,
        Transform::Capitalize,
        Transform::Camelize,
        Transform::CamelizeDownFirst,
        Transform::Titleize,
        Transform::Underscore,
        Transform::Dasherize,
        Transform::Humanize,
        Transform::ForeignKey,
        Transform::ForeignKeyCondensed,
        Transform::ForeignKeyToAttribute,
        Transform::Tableize,
        Transform::Typeify,
        Transform::Parameterize,
        Transform::Asciify,
        Transform::Ordinalize,
    ];

    /// Kebab-case name, as accepted by [`FromStr`]
    pub fn as_str(&self) -> &'static str {
        match self {
            Transform::Pluralize => "pluralize",
            Transform::Singularize => "singularize",
            Transform::Capitalize => "capitalize",
            Transform::Camelize => "camelize",
            Transform::CamelizeDownFirst => "camelize-down-first",
            Transform::Titleize => "titleize",
            Transform::Underscore => "underscore",
            Transform::Dasherize => "dasherize",
            Transform::Humanize => "humanize",
            Transform::ForeignKey => "foreign-key",
            Transform::ForeignKeyCondensed => "foreign-key-condensed",
            Transform::ForeignKeyToAttribute => "foreign-key-to-attribute",
            Transform::Tableize => "tableize",
            Transform::Typeify => "typeify",
            Transform::Parameterize => "parameterize",
            Transform::Asciify => "asciify",
            Transform::Ordinalize => "ordinalize",
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Transform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Transform::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| format!("Unknown transformation: {s}"))
    }
}
