//! Word segmentation at case changes and separators
//!
//! Every case-style conversion is built on this tokenizer. An uppercase
//! character or a spacer (`_`, ` `, `:`, `-`) ends the current token;
//! spacers themselves are dropped.

/// How characters are cased as they enter a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    /// Every character lowercased: `"XmlHttp"` → `["xml", "http"]`
    Lower,
    /// First character of each token uppercased, the rest lowercased
    Title,
}

/// Separator characters between words
pub fn is_spacer(ch: char) -> bool {
    matches!(ch, '_' | ' ' | ':' | '-')
}

/// Split `input` into word tokens
///
/// Always returns at least one token; an empty input yields `[""]`, and a
/// trailing spacer yields a trailing empty token.
pub fn split(input: &str, mode: CaseMode) -> Vec<String> {
    let mut words = Vec::new();
    let mut word = String::new();

    for ch in input.chars() {
        let spacer = is_spacer(ch);
        if !word.is_empty() && (ch.is_uppercase() || spacer) {
            words.push(std::mem::take(&mut word));
        }
        if spacer {
            continue;
        }
        match mode {
            CaseMode::Title if word.is_empty() => word.extend(ch.to_uppercase()),
            _ => word.extend(ch.to_lowercase()),
        }
    }

    words.push(word);
    words
}

/// Lowercase tokens: `"BigBen"` → `["big", "ben"]`
pub fn split_lowercase(input: &str) -> Vec<String> {
    split(input, CaseMode::Lower)
}

/// Title-cased tokens: `"dino_party"` → `["Dino", "Party"]`
pub fn split_titlecase(input: &str) -> Vec<String> {
    split(input, CaseMode::Title)
}
