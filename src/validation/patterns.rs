//! Text patterns shared by both rule sets

use regex::Regex;
use std::sync::LazyLock;

/// `local@domain.tld`, each part a run without whitespace or `@`
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

// The regex crate has no look-around, so each required character class is
// its own pattern.
static LOWERCASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[a-z]").expect("lowercase pattern is valid"));
static UPPERCASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[A-Z]").expect("uppercase pattern is valid"));
static DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[0-9]").expect("digit pattern is valid"));
/// Anything outside ASCII letters and digits; underscore counts as a symbol
static SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^A-Za-z0-9]").expect("symbol pattern is valid"));

/// Minimum number of characters the complexity check requires on its own
pub const COMPLEXITY_MIN_CHARS: usize = 8;

pub fn is_email_shaped(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

/// Lowercase, uppercase, digit and symbol, at least eight characters
pub fn is_complex_password(value: &str) -> bool {
    char_count(value) >= COMPLEXITY_MIN_CHARS
        && LOWERCASE.is_match(value)
        && UPPERCASE.is_match(value)
        && DIGIT.is_match(value)
        && SYMBOL.is_match(value)
}

/// Length as the user perceives it while typing
pub fn char_count(value: &str) -> usize {
    value.chars().count()
}
