/*!
 * Placeholder protection for localized strings.
 *
 * UI strings carry template variables like `{name}` or `{count}` that must
 * survive translation byte-for-byte. Before a string is sent to the
 * provider, every placeholder is swapped for a positional stand-in token
 * that no translator will touch; after translation the tokens are swapped
 * back.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a brace-delimited template variable, e.g. `{name}`.
/// Nested braces are not supported; the match ends at the first `}`.
static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{[^}]+\}").expect("placeholder pattern is valid"));

/// Stand-in token for the placeholder at the given scan position.
///
/// The `__VAR_n__` shape is deliberately unlike natural language so the
/// provider passes it through unchanged.
fn stand_in_token(index: usize) -> String {
    format!("__VAR_{}__", index)
}

/// Replace every placeholder in `text` with a positional stand-in token.
///
/// Returns the masked text and the ordered list of original placeholders.
/// Placeholders are tokenized in scan order; a placeholder that appears
/// twice gets two distinct tokens, one per occurrence, so restoration maps
/// tokens back positionally rather than by value.
///
/// Text without placeholders (including the empty string) is returned
/// unchanged with an empty list.
pub fn protect(text: &str) -> (String, Vec<String>) {
    let placeholders: Vec<String> = PLACEHOLDER_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();

    let mut masked = text.to_string();
    for (index, placeholder) in placeholders.iter().enumerate() {
        // Each replacen(.., 1) consumes the next literal occurrence, so
        // duplicate placeholders advance through the string one at a time.
        masked = masked.replacen(placeholder.as_str(), &stand_in_token(index), 1);
    }

    (masked, placeholders)
}

/// Replace each stand-in token in `text` with its original placeholder.
///
/// Best-effort by design: if the provider mangled or dropped a token, that
/// token is simply left (or absent) in the output. Callers treat this as a
/// cosmetic defect in one string, not an error.
pub fn restore(text: &str, placeholders: &[String]) -> String {
    let mut restored = text.to_string();
    for (index, placeholder) in placeholders.iter().enumerate() {
        restored = restored.replace(&stand_in_token(index), placeholder);
    }
    restored
}
