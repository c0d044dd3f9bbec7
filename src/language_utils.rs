use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for locale code handling
///
/// Locale codes in the locales directory are ISO 639-1 codes, optionally
/// with a region tag (e.g. "fr", "pt-br", "zh-cn"). This module provides
/// functions for validating codes and looking up display names for
/// diagnostics.
/// Extract the primary language subtag of a locale code
fn primary_subtag(code: &str) -> String {
    code.trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

/// Validate that a locale code carries a known ISO 639 language subtag
pub fn validate_language_code(code: &str) -> Result<()> {
    let subtag = primary_subtag(code);

    if subtag.is_empty() {
        return Err(anyhow!("Language code cannot be empty"));
    }

    let known = match subtag.len() {
        2 => Language::from_639_1(&subtag).is_some(),
        3 => Language::from_639_3(&subtag).is_some(),
        _ => false,
    };

    if known {
        Ok(())
    } else {
        Err(anyhow!("Invalid language code: {}", code))
    }
}

/// Check whether two locale codes refer to the same language,
/// ignoring case and region tags
pub fn language_codes_match(code1: &str, code2: &str) -> bool {
    let subtag1 = primary_subtag(code1);
    let subtag2 = primary_subtag(code2);

    if subtag1.is_empty() || subtag2.is_empty() {
        return false;
    }

    if subtag1 == subtag2 {
        return true;
    }

    // Compare across 639-1/639-3 forms, e.g. "fr" vs "fra"
    let language1 = Language::from_639_1(&subtag1).or_else(|| Language::from_639_3(&subtag1));
    let language2 = Language::from_639_1(&subtag2).or_else(|| Language::from_639_3(&subtag2));

    match (language1, language2) {
        (Some(l1), Some(l2)) => l1 == l2,
        _ => false,
    }
}

/// English display name for a locale code, falling back to the code itself
pub fn get_language_name(code: &str) -> String {
    let subtag = primary_subtag(code);

    let language = match subtag.len() {
        2 => Language::from_639_1(&subtag),
        3 => Language::from_639_3(&subtag),
        _ => None,
    };

    match language {
        Some(language) => language.to_name().to_string(),
        None => code.to_string(),
    }
}
