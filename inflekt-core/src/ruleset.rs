//! The rule store and every transformation built on it

use std::collections::HashSet;

use crate::acronym;
use crate::cosmetic;
use crate::rules::{defaults, Rule, RuleList};
use crate::segment::{split_lowercase, split_titlecase};
use crate::transform::Transform;

/// Mutable collection of inflection rules
///
/// Four ordered rule lists (plural, singular, human, acronym) plus a set of
/// uncountable words. Each list is searched front to back and `add_*`
/// prepends, so the most recently added rule wins.
///
/// A `Ruleset` has no interior locking. Share it behind a lock if rules are
/// added after other threads start reading; see [`crate::global`] for the
/// process-wide instance.
#[derive(Debug, Clone, Default)]
pub struct Ruleset {
    uncountables: HashSet<String>,
    plurals: RuleList,
    singulars: RuleList,
    humans: RuleList,
    acronyms: RuleList,
    // acronyms added after the baked-in table; only these are restored
    // from whole title-cased words
    custom_acronyms: HashSet<String>,
}

impl Ruleset {
    /// Create a blank ruleset with no rules at all
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ruleset loaded with the common English rules
    pub fn with_defaults() -> Self {
        let mut rs = Self::new();
        defaults::install(&mut rs);
        rs
    }

    pub fn plurals(&self) -> &RuleList {
        &self.plurals
    }

    pub fn singulars(&self) -> &RuleList {
        &self.singulars
    }

    pub fn humans(&self) -> &RuleList {
        &self.humans
    }

    /// Acronym rules: registered casing → title rendering
    pub fn acronym_rules(&self) -> &RuleList {
        &self.acronyms
    }

    /// Registered acronyms in matching order
    pub fn acronyms(&self) -> impl Iterator<Item = &str> {
        self.acronyms.iter().map(Rule::suffix)
    }

    pub fn uncountables(&self) -> &HashSet<String> {
        &self.uncountables
    }

    // ----- mutation -------------------------------------------------------

    /// Add a suffix pluralization rule
    pub fn add_plural(&mut self, suffix: impl Into<String>, replacement: impl Into<String>) {
        self.add_plural_exact(suffix, replacement, false);
    }

    /// Add a pluralization rule; `exact` forces a whole-word match
    pub fn add_plural_exact(
        &mut self,
        suffix: impl Into<String>,
        replacement: impl Into<String>,
        exact: bool,
    ) {
        if let Some(rule) = self.counted_rule(suffix.into(), replacement.into(), exact) {
            self.plurals.prepend(rule);
        }
    }

    /// Add a suffix singularization rule
    pub fn add_singular(&mut self, suffix: impl Into<String>, replacement: impl Into<String>) {
        self.add_singular_exact(suffix, replacement, false);
    }

    /// Add a singularization rule; `exact` forces a whole-word match
    pub fn add_singular_exact(
        &mut self,
        suffix: impl Into<String>,
        replacement: impl Into<String>,
        exact: bool,
    ) {
        if let Some(rule) = self.counted_rule(suffix.into(), replacement.into(), exact) {
            self.singulars.prepend(rule);
        }
    }

    /// Builds a plural/singular rule and takes its word out of the
    /// uncountables; empty suffixes are ignored.
    fn counted_rule(&mut self, suffix: String, replacement: String, exact: bool) -> Option<Rule> {
        if suffix.is_empty() {
            log::warn!("ignoring inflection rule with empty suffix (replacement {replacement:?})");
            return None;
        }
        self.uncountables.remove(&suffix.to_lowercase());
        Some(Rule::with_exact(suffix, replacement, exact))
    }

    /// Add a substring replacement applied by [`Ruleset::humanize`]
    pub fn add_human(&mut self, suffix: impl Into<String>, replacement: impl Into<String>) {
        let suffix = suffix.into();
        if suffix.is_empty() {
            log::warn!("ignoring human rule with empty pattern");
            return;
        }
        self.humans.prepend(Rule::new(suffix, replacement));
    }

    /// Register a word pair whose plural is not formed by the suffix rules
    ///
    /// Pluralizing either form yields `plural`; singularizing `plural`
    /// yields `singular`.
    pub fn add_irregular(&mut self, singular: &str, plural: &str) {
        self.uncountables.remove(&singular.to_lowercase());
        self.uncountables.remove(&plural.to_lowercase());
        self.add_plural(singular, plural);
        self.add_plural(plural, plural);
        self.add_singular(plural, singular);
    }

    /// Register an acronym so case conversions keep it as one word
    ///
    /// Without it `"HTMLParser"` underscores to `"h_t_m_l_parser"`.
    /// [`Ruleset::titleize`] also restores it from a whole word, so
    /// `"html parser"` becomes `"HTML Parser"`.
    pub fn add_acronym(&mut self, word: &str) {
        if word.is_empty() {
            log::warn!("ignoring empty acronym");
            return;
        }
        self.add_builtin_acronym(word);
        self.custom_acronyms.insert(word.to_string());
    }

    /// Acronym from the baked-in table: folded, and merged from single-letter
    /// runs when titleizing, but never restored from a whole word
    pub(crate) fn add_builtin_acronym(&mut self, word: &str) {
        self.acronyms
            .prepend(Rule::new(word, acronym::title_rendering(word)));
    }

    /// Register a word whose singular and plural forms are identical
    pub fn add_uncountable(&mut self, word: &str) {
        self.uncountables.insert(word.to_lowercase());
    }

    // ----- queries --------------------------------------------------------

    /// Whether the last word of `word` is uncountable
    pub fn is_uncountable(&self, word: &str) -> bool {
        let last = word.rsplit(' ').next().unwrap_or(word);
        self.uncountables.contains(&last.to_lowercase())
    }

    /// Whether `word` is a registered acronym (exact casing)
    pub fn is_acronym(&self, word: &str) -> bool {
        self.acronyms().any(|acronym| acronym == word)
    }

    // ----- plural / singular ----------------------------------------------

    /// `"person"` → `"people"`, `"cat"` → `"cats"`
    pub fn pluralize(&self, word: &str) -> String {
        if word.is_empty() || self.is_uncountable(word) {
            return word.to_string();
        }
        self.apply_rules(word, &self.plurals)
            .unwrap_or_else(|| format!("{word}s"))
    }

    /// `"people"` → `"person"`, `"cats"` → `"cat"`
    pub fn singularize(&self, word: &str) -> String {
        if word.chars().count() <= 1 || self.is_uncountable(word) {
            return word.to_string();
        }
        self.apply_rules(word, &self.singulars)
            .unwrap_or_else(|| word.to_string())
    }

    /// Singular for a count of exactly one, plural otherwise
    pub fn pluralize_with_size(&self, word: &str, size: i64) -> String {
        if size == 1 {
            self.singularize(word)
        } else {
            self.pluralize(word)
        }
    }

    /// First applicable rule in `rules`, or `None` when nothing matched
    ///
    /// Exact rules return on a whole-word match. For suffix rules, a
    /// case-insensitive whole-word match is remembered as a fallback while
    /// the scan continues; the first case-sensitive suffix match returns
    /// immediately. The fallback is used only when no suffix matched.
    fn apply_rules(&self, word: &str, rules: &RuleList) -> Option<String> {
        let lower = word.to_lowercase();
        let mut candidate: Option<&str> = None;

        for rule in rules {
            if rule.is_exact() {
                if lower == rule.suffix() {
                    if only_first_letter_differs(word, &lower) {
                        return Some(self.capitalize(rule.replacement()));
                    }
                    return Some(rule.replacement().to_string());
                }
                continue;
            }

            if lower == rule.suffix().to_lowercase() {
                candidate = Some(rule.replacement());
            }

            if let Some(stem) = word.strip_suffix(rule.suffix()) {
                return Some(format!("{stem}{}", rule.replacement()));
            }
        }

        candidate.map(str::to_string)
    }

    // ----- case styles ----------------------------------------------------

    /// Uppercase the first character; `"id"` becomes `"ID"`
    pub fn capitalize(&self, word: &str) -> String {
        if word.eq_ignore_ascii_case("id") {
            return "ID".to_string();
        }
        let mut chars = word.chars();
        match chars.next() {
            None => String::new(),
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        }
    }

    /// `"dino_party"` → `"DinoParty"`
    pub fn camelize(&self, word: &str) -> String {
        if word.eq_ignore_ascii_case("id") {
            return "ID".to_string();
        }
        split_titlecase(word).concat()
    }

    /// `"dino_party"` → `"dinoParty"`
    pub fn camelize_down_first(&self, word: &str) -> String {
        let camel = self.camelize(word);
        let mut chars = camel.chars();
        match chars.next() {
            None => String::new(),
            Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        }
    }

    /// `"hello there"` → `"Hello There"`, keeping registered acronyms whole
    pub fn titleize(&self, word: &str) -> String {
        acronym::reconcile(&split_titlecase(word), &self.acronyms, &self.custom_acronyms)
    }

    fn separated_words(&self, word: &str, sep: &str) -> String {
        let folded = acronym::fold(word, &self.acronyms);
        split_lowercase(&folded).join(sep)
    }

    /// `"BigBen"` → `"big_ben"`
    pub fn underscore(&self, word: &str) -> String {
        self.separated_words(word, "_")
    }

    /// `"SomeText"` → `"some-text"`
    pub fn dasherize(&self, word: &str) -> String {
        self.separated_words(word, "-")
    }

    /// `"employee_salary_id"` → `"Employee salary"`
    ///
    /// Human rules registered with [`Ruleset::add_human`] are applied
    /// before segmenting.
    pub fn humanize(&self, word: &str) -> String {
        let mut word = word.strip_suffix("_id").unwrap_or(word).to_string();
        for rule in &self.humans {
            word = word.replace(rule.suffix(), rule.replacement());
        }
        let sentence = self.separated_words(&word, " ");

        let mut chars = sentence.chars();
        match chars.next() {
            None => String::new(),
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        }
    }

    // ----- naming helpers -------------------------------------------------

    /// `"Person"` → `"person_id"`
    pub fn foreign_key(&self, word: &str) -> String {
        format!("{}_id", self.underscore(&self.singularize(word)))
    }

    /// `"Person"` → `"personid"`
    pub fn foreign_key_condensed(&self, word: &str) -> String {
        format!("{}id", self.underscore(word))
    }

    /// `"person_id"` → `"PersonID"`
    pub fn foreign_key_to_attribute(&self, word: &str) -> String {
        let camel = self.camelize(word);
        match camel.strip_suffix("Id") {
            Some(stem) => format!("{stem}ID"),
            None => camel,
        }
    }

    /// `"SuperPerson"` → `"super_people"`
    pub fn tableize(&self, word: &str) -> String {
        self.pluralize(&self.underscore(&self.typeify(word)))
    }

    /// `"app.blog_posts"` → `"BlogPost"`
    pub fn typeify(&self, word: &str) -> String {
        let word = cosmetic::strip_table_prefix(word);
        self.camelize(&self.singularize(&word))
    }

    // ----- cosmetic -------------------------------------------------------

    /// `"Hello World!"` → `"hello-world"`
    pub fn parameterize(&self, word: &str) -> String {
        self.parameterize_join(word, "-")
    }

    pub fn parameterize_join(&self, word: &str, sep: &str) -> String {
        cosmetic::parameterize_join(word, sep)
    }

    pub fn asciify(&self, word: &str) -> String {
        cosmetic::asciify(word)
    }

    pub fn ordinalize(&self, word: &str) -> String {
        cosmetic::ordinalize(word)
    }

    /// Run a single-argument transformation by name
    pub fn apply(&self, transform: Transform, word: &str) -> String {
        match transform {
            Transform::Pluralize => self.pluralize(word),
            Transform::Singularize => self.singularize(word),
            Transform::Capitalize => self.capitalize(word),
            Transform::Camelize => self.camelize(word),
            Transform::CamelizeDownFirst => self.camelize_down_first(word),
            Transform::Titleize => self.titleize(word),
            Transform::Underscore => self.underscore(word),
            Transform::Dasherize => self.dasherize(word),
            Transform::Humanize => self.humanize(word),
            Transform::ForeignKey => self.foreign_key(word),
            Transform::ForeignKeyCondensed => self.foreign_key_condensed(word),
            Transform::ForeignKeyToAttribute => self.foreign_key_to_attribute(word),
            Transform::Tableize => self.tableize(word),
            Transform::Typeify => self.typeify(word),
            Transform::Parameterize => self.parameterize(word),
            Transform::Asciify => self.asciify(word),
            Transform::Ordinalize => self.ordinalize(word),
        }
    }
}

/// `"Ox"` vs `"ox"`: same word except for the case of the first letter
fn only_first_letter_differs(word: &str, lower: &str) -> bool {
    let mut original = word.chars();
    let mut lowered = lower.chars();
    original.next() != lowered.next() && original.as_str() == lowered.as_str()
}
