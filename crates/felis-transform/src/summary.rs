//! Summary generation.

use std::sync::LazyLock;

use regex::Regex;

/// Hard cap for card layout; truncation may cut mid-word.
const MAX_SUMMARY_CHARS: usize = 150;

/// A sentence is a run of non-terminator characters followed by `.`, `!`, or `?`.
static SENTENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.!?]+[.!?]").expect("sentence pattern compiles"));

/// Produce the card summary for a description.
///
/// Takes the first sentence when one exists, otherwise the whole text, then
/// trims and truncates to 150 characters.
#[must_use]
pub fn summarize(description: &str) -> String {
    if description.is_empty() {
        return String::new();
    }
    let base = SENTENCE
        .find(description)
        .map_or(description, |m| m.as_str())
        .trim();
    truncate_chars(base, MAX_SUMMARY_CHARS)
}

/// Cut `text` to at most `limit` characters, counting chars rather than
/// bytes so multi-byte input never splits a code point.
fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}
