//! Acronym folding and reconciliation
//!
//! Acronym rules map the registered casing (`"HTML"`) to its title
//! rendering (`"Html"`). Folding applies them before segmentation so an
//! acronym is split as one word; reconciliation restores the registered
//! casing in title-style output.

use std::collections::HashSet;

use crate::rules::{Rule, RuleList};
use crate::segment::split_titlecase;

/// Title rendering of an acronym: `"HTML"` → `"Html"`, `"POP3"` → `"Pop3"`
pub fn title_rendering(acronym: &str) -> String {
    split_titlecase(&acronym.to_lowercase()).join(" ")
}

/// Rewrite every registered acronym in `word` to its title rendering
pub fn fold(word: &str, acronyms: &RuleList) -> String {
    let mut folded = word.to_string();
    for rule in acronyms {
        if folded.contains(rule.suffix()) {
            folded = folded.replace(rule.suffix(), rule.replacement());
        }
    }
    folded
}

fn find_by_key<'a>(acronyms: &'a RuleList, key: &str) -> Option<&'a Rule> {
    acronyms.iter().find(|rule| rule.suffix() == key)
}

fn find_by_rendering<'a>(
    acronyms: &'a RuleList,
    whole_words: &HashSet<String>,
    token: &str,
) -> Option<&'a Rule> {
    acronyms
        .iter()
        .find(|rule| rule.replacement() == token && whole_words.contains(rule.suffix()))
}

/// Join title-cased tokens with spaces, restoring registered acronyms
///
/// A run of single-letter tokens whose concatenation is a registered
/// acronym is merged (`["U", "S", "A"]` → `"USA"`). A token equal to the
/// title rendering of an acronym listed in `whole_words` takes the
/// registered casing (`"Html"` → `"HTML"`); other acronyms only match
/// letter runs, so ordinary words such as `"Post"` stay as they are.
pub fn reconcile(
    tokens: &[String],
    acronyms: &RuleList,
    whole_words: &HashSet<String>,
) -> String {
    let mut out: Vec<String> = Vec::with_capacity(tokens.len());
    let mut run: Vec<&str> = Vec::new();

    for token in tokens {
        if token.chars().count() == 1 {
            run.push(token);
            continue;
        }
        flush_run(&mut run, acronyms, &mut out);
        match find_by_rendering(acronyms, whole_words, token) {
            Some(rule) => out.push(rule.suffix().to_string()),
            None => out.push(token.clone()),
        }
    }
    flush_run(&mut run, acronyms, &mut out);

    out.join(" ")
}

fn flush_run(run: &mut Vec<&str>, acronyms: &RuleList, out: &mut Vec<String>) {
    if run.is_empty() {
        return;
    }
    let joined = run.concat();
    if find_by_key(acronyms, &joined).is_some() {
        out.push(joined);
    } else {
        out.extend(run.iter().map(|t| t.to_string()));
    }
    run.clear();
}
