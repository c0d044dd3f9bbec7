/*!
 * Resilient single-string translation.
 *
 * This module contains the TranslationService, which wraps one provider
 * call with placeholder protection, retries with jittered backoff, and a
 * degrade-to-original fallback. A string that cannot be translated after
 * the retry budget is returned untouched; partial translation failure must
 * never abort a batch.
 */

use log::{debug, warn};
use std::sync::Arc;

use crate::pacing::{self, Sleeper};
use crate::placeholder;
use crate::providers::TranslationProvider;

/// Longest text prefix included in diagnostics
const PREVIEW_CHARS: usize = 50;

/// Translation service for a single source language
pub struct TranslationService {
    /// Provider implementation
    provider: Arc<dyn TranslationProvider>,

    /// Sleep implementation, injectable for tests
    sleeper: Arc<dyn Sleeper>,

    /// Source language code of every input string
    source_language: String,

    /// Maximum number of provider attempts per string
    retry_count: u32,
}

impl TranslationService {
    /// Create a new translation service
    pub fn new(
        provider: Arc<dyn TranslationProvider>,
        sleeper: Arc<dyn Sleeper>,
        source_language: impl Into<String>,
        retry_count: u32,
    ) -> Self {
        Self {
            provider,
            sleeper,
            source_language: source_language.into(),
            retry_count,
        }
    }

    /// Source language code this service translates from
    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    /// Translate one string into the target language.
    ///
    /// Empty and whitespace-only strings are returned as-is without a
    /// provider call. Placeholders like `{count}` are masked before the
    /// call and restored into the provider's output. Each failed attempt
    /// is followed by a jittered backoff sleep; once the retry budget is
    /// exhausted the original text is returned unchanged.
    pub async fn translate_text(&self, text: &str, target_language: &str) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }

        let (masked, placeholders) = placeholder::protect(text);

        for attempt in 1..=self.retry_count {
            match self
                .provider
                .translate(&masked, &self.source_language, target_language)
                .await
            {
                Ok(translated) => {
                    debug!(
                        "Translated '{}' to {} on attempt {}",
                        preview(text),
                        target_language,
                        attempt
                    );
                    return placeholder::restore(&translated, &placeholders);
                }
                Err(e) => {
                    warn!(
                        "Attempt {}/{} failed translating '{}': {}",
                        attempt,
                        self.retry_count,
                        preview(text),
                        e
                    );

                    if attempt < self.retry_count {
                        let delay = pacing::retry_backoff(attempt);
                        debug!("Waiting {:.1}s before retrying", delay.as_secs_f64());
                        self.sleeper.sleep(delay).await;
                    }
                }
            }
        }

        warn!(
            "Could not translate '{}' after {} attempts, keeping original text",
            preview(text),
            self.retry_count
        );
        text.to_string()
    }
}

/// Truncated text preview for log messages
fn preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_CHARS {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", truncated)
    }
}
