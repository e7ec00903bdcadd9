//! Common utility functions shared across the codebase.

use std::sync::OnceLock;

use regex::Regex;

/// Maximum length of a key name derived from a resource value.
const MAX_DERIVED_KEY_LEN: usize = 100;

/// Checks whether `name` is a valid C# identifier (ASCII subset, which is
/// what generated resource keys use).
///
/// # Examples
///
/// ```
/// use resxlint::utils::is_valid_identifier;
///
/// assert!(is_valid_identifier("Saved_file__0_"));
/// assert!(is_valid_identifier("_1"));
/// assert!(!is_valid_identifier("1abc"));
/// assert!(!is_valid_identifier("a-b"));
/// assert!(!is_valid_identifier(""));
/// ```
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

/// Derive the conventional key name for a resource value: every character
/// outside `[A-Za-z0-9]` becomes `_`, a leading digit gets a `_` prefix,
/// and the result is truncated. Empty input yields an empty string (no
/// convention to enforce).
///
/// # Examples
///
/// ```
/// use resxlint::utils::key_from_value;
///
/// assert_eq!(key_from_value("Saved file {0}"), "Saved_file__0_");
/// assert_eq!(key_from_value("OK"), "OK");
/// assert_eq!(key_from_value("1 item"), "_1_item");
/// assert_eq!(key_from_value(""), "");
/// ```
pub fn key_from_value(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    let mut key: String = value
        .chars()
        .take(MAX_DERIVED_KEY_LEN)
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if key.starts_with(|c: char| c.is_ascii_digit()) {
        key.insert(0, '_');
    }
    key
}

/// True when the text contains a positional format placeholder such as
/// `{0}` or `{1}` (optionally with alignment/format parts, `{0,5:N1}`).
pub fn has_positional_placeholder(text: &str) -> bool {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    let regex = PLACEHOLDER
        .get_or_init(|| Regex::new(r"\{\d+(,[^{}]*)?(:[^{}]*)?\}").expect("placeholder regex"));
    regex.is_match(text)
}
