//! Process-wide default ruleset and its free-function facade
//!
//! The default instance is built on first use: the baked-in English rules,
//! plus any irregulars found at [`default_rules_path`]. A missing file is
//! fine; an unreadable or malformed one is logged and skipped.
//!
//! Lookups take a shared lock and rule additions take an exclusive one, so
//! both are safe to call from any thread at any time.

use std::io::Read;
use std::path::Path;
use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::Result;
use crate::loader::default_rules_path;
use crate::ruleset::Ruleset;
use crate::transform::Transform;

static DEFAULT: OnceLock<RwLock<Ruleset>> = OnceLock::new();

fn instance() -> &'static RwLock<Ruleset> {
    DEFAULT.get_or_init(|| RwLock::new(bootstrap(&default_rules_path())))
}

/// Defaults plus the optional rules file at `path`
pub(crate) fn bootstrap(path: &Path) -> Ruleset {
    let mut rs = Ruleset::with_defaults();
    if !path.exists() {
        return rs;
    }

    if let Err(e) = rs.load_file(path) {
        log::warn!("{e}");
    }
    rs
}

// A panic while holding the lock cannot leave the rule lists inconsistent
// (every mutation is a single push/insert), so poisoning is ignored.
fn read() -> RwLockReadGuard<'static, Ruleset> {
    instance().read().unwrap_or_else(PoisonError::into_inner)
}

fn write() -> RwLockWriteGuard<'static, Ruleset> {
    instance().write().unwrap_or_else(PoisonError::into_inner)
}

/// Run `f` against the default ruleset under one read lock
///
/// `f` must only use the `&Ruleset` it is given. Calling a free function
/// of this module from inside it locks the default ruleset again, which
/// deadlocks if a writer is already waiting.
pub fn with_default<T>(f: impl FnOnce(&Ruleset) -> T) -> T {
    f(&read())
}

/// Mutate the default ruleset under one write lock
///
/// `f` must only use the `&mut Ruleset` it is given. Any free function of
/// this module called from inside it deadlocks on the held write lock.
pub fn with_default_mut<T>(f: impl FnOnce(&mut Ruleset) -> T) -> T {
    f(&mut write())
}

/// Copy of the default ruleset as it is right now
pub fn snapshot() -> Ruleset {
    read().clone()
}

// ----- mutation ----------------------------------------------------------

pub fn add_plural(suffix: &str, replacement: &str) {
    write().add_plural(suffix, replacement);
}

pub fn add_plural_exact(suffix: &str, replacement: &str, exact: bool) {
    write().add_plural_exact(suffix, replacement, exact);
}

pub fn add_singular(suffix: &str, replacement: &str) {
    write().add_singular(suffix, replacement);
}

pub fn add_singular_exact(suffix: &str, replacement: &str, exact: bool) {
    write().add_singular_exact(suffix, replacement, exact);
}

pub fn add_human(suffix: &str, replacement: &str) {
    write().add_human(suffix, replacement);
}

pub fn add_irregular(singular: &str, plural: &str) {
    write().add_irregular(singular, plural);
}

pub fn add_acronym(word: &str) {
    write().add_acronym(word);
}

pub fn add_uncountable(word: &str) {
    write().add_uncountable(word);
}

/// Register the JSON singular → plural pairs read from `reader`
pub fn load_reader<R: Read>(reader: R) -> Result<usize> {
    write().load_reader(reader)
}

/// Load a JSON or TOML rules file into the default ruleset
pub fn load_file(path: impl AsRef<Path>) -> Result<usize> {
    write().load_file(path)
}

// ----- transformations ---------------------------------------------------

pub fn pluralize(word: &str) -> String {
    read().pluralize(word)
}

pub fn pluralize_with_size(word: &str, size: i64) -> String {
    read().pluralize_with_size(word, size)
}

pub fn singularize(word: &str) -> String {
    read().singularize(word)
}

pub fn capitalize(word: &str) -> String {
    read().capitalize(word)
}

pub fn camelize(word: &str) -> String {
    read().camelize(word)
}

pub fn camelize_down_first(word: &str) -> String {
    read().camelize_down_first(word)
}

pub fn titleize(word: &str) -> String {
    read().titleize(word)
}

pub fn underscore(word: &str) -> String {
    read().underscore(word)
}

pub fn dasherize(word: &str) -> String {
    read().dasherize(word)
}

pub fn humanize(word: &str) -> String {
    read().humanize(word)
}

pub fn foreign_key(word: &str) -> String {
    read().foreign_key(word)
}

pub fn foreign_key_condensed(word: &str) -> String {
    read().foreign_key_condensed(word)
}

pub fn foreign_key_to_attribute(word: &str) -> String {
    read().foreign_key_to_attribute(word)
}

pub fn tableize(word: &str) -> String {
    read().tableize(word)
}

pub fn typeify(word: &str) -> String {
    read().typeify(word)
}

pub fn parameterize(word: &str) -> String {
    read().parameterize(word)
}

pub fn parameterize_join(word: &str, sep: &str) -> String {
    read().parameterize_join(word, sep)
}

pub fn asciify(word: &str) -> String {
    read().asciify(word)
}

pub fn ordinalize(word: &str) -> String {
    read().ordinalize(word)
}

pub fn apply(transform: Transform, word: &str) -> String {
    read().apply(transform, word)
}
