/*!
 * Provider implementations for remote translation services.
 *
 * This module contains client implementations for translation backends:
 * - LibreTranslate: any LibreTranslate-compatible HTTP endpoint
 * - Mock: configurable in-memory provider for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for all translation providers
///
/// This trait defines the interface that all provider implementations must
/// follow, allowing the translation service to treat the remote backend as
/// an injected black box (and tests to substitute a mock).
#[async_trait]
pub trait TranslationProvider: Send + Sync + Debug {
    /// Translate a single string from the source to the target language
    ///
    /// # Arguments
    /// * `text` - The text to translate
    /// * `source_language` - Language code of the input text
    /// * `target_language` - Language code to translate into
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The translated text or a transient error
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, ProviderError>;

    /// Test the connection to the provider
    ///
    /// # Returns
    /// * `Result<(), ProviderError>` - Ok if the provider is reachable, or an error
    async fn test_connection(&self) -> Result<(), ProviderError>;

    /// Human-readable provider name for diagnostics
    fn name(&self) -> &str;
}

pub mod libretranslate;
pub mod mock;
