// Text normalization — the shared first step of every analysis mode.
//
// Order matters: URLs and emails are stripped before digits, otherwise
// "covid19.com" would leave "covid.com" behind instead of disappearing.

use once_cell::sync::Lazy;
use regex::Regex;

static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"http\S+|www\S+").unwrap());
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+").unwrap());
static DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());
// Anything that is not a word character, whitespace, or an accented Spanish
// letter becomes a single space.
static SYMBOL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\sáéíóúüñ]").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalize raw article text for vocabulary building.
///
/// Lowercases, strips URL-like and email-like tokens, removes digit runs,
/// replaces punctuation with spaces (accents preserved), and collapses
/// whitespace. Pure and idempotent; empty input yields an empty string.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let text = text.to_lowercase();
    let text = URL_RE.replace_all(&text, "");
    let text = EMAIL_RE.replace_all(&text, "");
    let text = DIGITS_RE.replace_all(&text, "");
    let text = SYMBOL_RE.replace_all(&text, " ");
    let text = WHITESPACE_RE.replace_all(&text, " ");
    text.trim().to_string()
}
