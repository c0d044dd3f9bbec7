/*!
 * Mock provider implementations for testing.
 *
 * This module provides mock providers that simulate different behaviors:
 * - `MockProvider::working()` - Always succeeds with tagged text
 * - `MockProvider::uppercasing()` - Succeeds by uppercasing the input
 * - `MockProvider::fail_first(n)` - Fails the first n requests, then succeeds
 * - `MockProvider::failing()` - Always fails with an error
 */

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::ProviderError;
use crate::providers::TranslationProvider;

/// Behavior mode for the mock provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds, tagging the text with the target language
    Working,
    /// Always succeeds by uppercasing the input text
    Uppercasing,
    /// Fails the first N requests, then succeeds
    FailFirst {
        /// Number of leading requests that fail
        failures: usize,
    },
    /// Always fails with an error
    Failing,
}

/// Mock provider for testing translation behavior
#[derive(Debug)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Shared request counter, also used by FailFirst
    request_count: Arc<AtomicUsize>,
    /// Custom response generator (optional)
    custom_response: Option<fn(&str, &str, &str) -> String>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            custom_response: None,
        }
    }

    /// Create a working mock provider that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a mock provider that uppercases the text it is given
    pub fn uppercasing() -> Self {
        Self::new(MockBehavior::Uppercasing)
    }

    /// Create a mock provider that fails the first `failures` requests
    pub fn fail_first(failures: usize) -> Self {
        Self::new(MockBehavior::FailFirst { failures })
    }

    /// Create a failing mock provider that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Set a custom response generator receiving (text, source, target)
    pub fn with_custom_response(mut self, generator: fn(&str, &str, &str) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Number of translate calls made so far (shared across clones)
    pub fn call_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }
}

impl Clone for MockProvider {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            request_count: Arc::clone(&self.request_count),
            custom_response: self.custom_response,
        }
    }
}

#[async_trait]
impl TranslationProvider for MockProvider {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, ProviderError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst);

        if let Some(generator) = self.custom_response {
            return Ok(generator(text, source_language, target_language));
        }

        match self.behavior {
            MockBehavior::Working => Ok(format!("[{}] {}", target_language, text)),

            MockBehavior::Uppercasing => Ok(text.to_uppercase()),

            MockBehavior::FailFirst { failures } => {
                if count < failures {
                    Err(ProviderError::ApiError {
                        status_code: 503,
                        message: format!("Simulated transient failure (request #{})", count + 1),
                    })
                } else {
                    Ok(format!("[{}] {}", target_language, text))
                }
            }

            MockBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 500,
                message: "Simulated provider failure".to_string(),
            }),
        }
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        match self.behavior {
            MockBehavior::Failing => Err(ProviderError::ConnectionError(
                "Simulated connection failure".to_string(),
            )),
            _ => Ok(()),
        }
    }

    fn name(&self) -> &str {
        "Mock"
    }
}
