//! Table-driven helpers with no rule-engine involvement
//!
//! Ordinal suffixes, diacritic folding and URL-safe parameter names.

use regex::Regex;
use std::sync::OnceLock;

static NOT_URL_SAFE: OnceLock<Regex> = OnceLock::new();
static TABLE_PREFIX: OnceLock<Regex> = OnceLock::new();

fn not_url_safe() -> &'static Regex {
    NOT_URL_SAFE.get_or_init(|| Regex::new(r"[^A-Za-z0-9\-_ ]").expect("static pattern"))
}

fn table_prefix() -> &'static Regex {
    TABLE_PREFIX.get_or_init(|| Regex::new(r"^[^.]*\.").expect("static pattern"))
}

/// `"1"` → `"1st"`, `"12"` → `"12th"`, `"-22"` → `"-22nd"`
///
/// Input that does not parse as an integer is returned unchanged.
pub fn ordinalize(input: &str) -> String {
    let Ok(number) = input.parse::<i64>() else {
        return input.to_string();
    };
    let magnitude = number.unsigned_abs();
    let suffix = match magnitude % 100 {
        11..=13 => "th",
        _ => match magnitude % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };
    format!("{number}{suffix}")
}

/// ASCII replacement for a Latin character with diacritics
fn ascii_lookalike(ch: char) -> Option<&'static str> {
    let replacement = match ch {
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => "A",
        'Æ' => "AE",
        'Ç' => "C",
        'È' | 'É' | 'Ê' | 'Ë' => "E",
        'Ğ' => "G",
        'Ì' | 'Í' | 'Î' | 'Ï' | 'İ' => "I",
        'Ñ' => "N",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => "O",
        'Ş' => "S",
        'Ù' | 'Ú' | 'Û' | 'Ü' => "U",
        'Ý' => "Y",
        'ß' => "ss",
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => "a",
        'æ' => "ae",
        'ç' => "c",
        'è' | 'é' | 'ê' | 'ë' => "e",
        'ğ' => "g",
        'ì' | 'í' | 'î' | 'ï' | 'ı' => "i",
        'ñ' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => "o",
        'ş' => "s",
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => "u",
        'ý' | 'ÿ' => "y",
        _ => return None,
    };
    Some(replacement)
}

/// Fold Latin diacritics to ASCII: `"café"` → `"cafe"`
pub fn asciify(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    for ch in word.chars() {
        match ascii_lookalike(ch) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(ch),
        }
    }
    out
}

/// URL-safe name joined with `sep`: `"Hello World!"` → `"hello-world"`
pub fn parameterize_join(word: &str, sep: &str) -> String {
    let lowered = asciify(&word.to_lowercase());
    let stripped = not_url_safe().replace_all(&lowered, "");
    let mut joined = stripped.replace(' ', sep);

    if !sep.is_empty() {
        let doubled = sep.repeat(2);
        while joined.contains(&doubled) {
            joined = joined.replace(&doubled, sep);
        }
    }

    joined
        .trim_matches(|ch: char| ch == ' ' || sep.contains(ch))
        .to_string()
}

/// Drop a leading `schema.` qualifier: `"app.users"` → `"users"`
pub fn strip_table_prefix(word: &str) -> String {
    table_prefix().replace(word, "").into_owned()
}
