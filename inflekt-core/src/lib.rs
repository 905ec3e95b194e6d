//! Rule-based English inflection for identifiers and names
//!
//! This crate derives related forms of a word: plural and singular nouns,
//! and the usual identifier case styles (`CamelCase`, `snake_case`,
//! `dash-case`, `Title Case`, human sentences). Everything is driven by a
//! [`Ruleset`]: ordered suffix rules, irregular pairs, uncountable words and
//! acronyms, where the most recently added rule wins.
//!
//! # Architecture
//!
//! - **rules**: the rule type, ordered rule lists and the baked-in table
//! - **segment**: splitting words at case changes and separators
//! - **acronym**: keeping registered acronyms whole across case conversions
//! - **ruleset**: the rule store, suffix engine and composed conversions
//! - **loader** / **config**: extra rules from JSON or TOML documents
//! - **global**: the process-wide default ruleset behind free functions
//!
//! # Example
//!
//! ```rust
//! use inflekt_core::Ruleset;
//!
//! let mut rs = Ruleset::with_defaults();
//! assert_eq!(rs.pluralize("person"), "people");
//! assert_eq!(rs.underscore("BigBen"), "big_ben");
//!
//! rs.add_irregular("cactus", "cacti");
//! assert_eq!(rs.singularize("cacti"), "cactus");
//!
//! // Free functions use the shared default ruleset
//! assert_eq!(inflekt_core::camelize("dino_party"), "DinoParty");
//! assert_eq!(inflekt_core::foreign_key("Person"), "person_id");
//! ```

pub mod acronym;
pub mod config;
pub mod cosmetic;
pub mod error;
pub mod global;
pub mod loader;
pub mod rules;
pub mod ruleset;
pub mod segment;
pub mod transform;

pub use config::RulesConfig;
pub use error::InflectError;
pub use loader::{default_rules_path, DEFAULT_FILE_NAME, INFLECT_PATH_ENV};
pub use rules::{Rule, RuleList};
pub use ruleset::Ruleset;
pub use transform::Transform;

// Free-function facade over the default ruleset
pub use global::{
    add_acronym, add_human, add_irregular, add_plural, add_plural_exact, add_singular,
    add_singular_exact, add_uncountable, apply, asciify, camelize, camelize_down_first,
    capitalize, dasherize, foreign_key, foreign_key_condensed, foreign_key_to_attribute,
    humanize, load_file, load_reader, ordinalize, parameterize, parameterize_join, pluralize,
    pluralize_with_size, singularize, snapshot, tableize, titleize, typeify, underscore,
    with_default, with_default_mut,
};
