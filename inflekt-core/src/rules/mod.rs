//! Rule tables
//!
//! A rule maps a suffix to its replacement. Rules live in ordered lists
//! searched front to back, and new rules are prepended so the most recently
//! registered rule wins.

pub mod defaults;

use std::collections::VecDeque;

/// Suffix rewrite rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    suffix: String,
    replacement: String,
    /// Match the whole word (case-insensitively) instead of a suffix
    exact: bool,
}

impl Rule {
    /// Create a suffix rule
    pub fn new(suffix: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self::with_exact(suffix, replacement, false)
    }

    /// Create a rule, choosing whole-word or suffix matching
    pub fn with_exact(
        suffix: impl Into<String>,
        replacement: impl Into<String>,
        exact: bool,
    ) -> Self {
        Self {
            suffix: suffix.into(),
            replacement: replacement.into(),
            exact,
        }
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    pub fn is_exact(&self) -> bool {
        self.exact
    }
}

/// Ordered rule list with most-recent-first precedence
#[derive(Debug, Clone, Default)]
pub struct RuleList {
    rules: VecDeque<Rule>,
}

impl RuleList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rule ahead of every existing rule
    pub fn prepend(&mut self, rule: Rule) {
        self.rules.push_front(rule);
    }

    /// Rules in matching order
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleList {
    type Item = &'a Rule;
    type IntoIter = std::collections::vec_deque::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
