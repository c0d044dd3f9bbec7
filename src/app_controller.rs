use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::app_config::Config;
use crate::document::DocumentTranslator;
use crate::errors::DocumentError;
use crate::file_utils::FileManager;
use crate::language_utils;
use crate::pacing::{self, Sleeper, TokioSleeper};
use crate::providers::TranslationProvider;
use crate::providers::libretranslate::LibreTranslate;
use crate::translation_service::TranslationService;

// @module: Application controller for batch locale translation

/// Main application controller for the translation batch
///
/// Processes target languages strictly one after another: translate the
/// full source document, persist the result, pause, move on. A failure in
/// one language is logged and skipped; only a missing or unparsable source
/// document aborts the run.
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Provider shared with the translation service
    provider: Arc<dyn TranslationProvider>,

    // @field: Document walker
    translator: DocumentTranslator,

    // @field: Sleep implementation for pacing between languages
    sleeper: Arc<dyn Sleeper>,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let api_key = if config.translation.api_key.is_empty() {
            None
        } else {
            Some(config.translation.api_key.clone())
        };

        let provider = LibreTranslate::new(
            &config.translation.endpoint,
            api_key,
            config.translation.timeout_secs,
        )
        .context("Failed to create translation provider")?;

        Ok(Self::with_parts(config, Arc::new(provider), Arc::new(TokioSleeper)))
    }

    /// Create a controller from explicit parts, used by tests to inject a
    /// mock provider and a recording sleeper
    pub fn with_parts(
        config: Config,
        provider: Arc<dyn TranslationProvider>,
        sleeper: Arc<dyn Sleeper>,
    ) -> Self {
        let service = TranslationService::new(
            Arc::clone(&provider),
            Arc::clone(&sleeper),
            config.source_language.clone(),
            config.translation.retry_count,
        );
        let translator = DocumentTranslator::new(service, Arc::clone(&sleeper));

        Self {
            config,
            provider,
            translator,
            sleeper,
        }
    }

    /// Verify that the configured provider is reachable
    pub async fn check_connection(&self) -> Result<()> {
        self.provider
            .test_connection()
            .await
            .with_context(|| format!("Connection test to {} failed", self.provider.name()))?;
        info!("Successfully connected to {}", self.provider.name());
        Ok(())
    }

    /// Run the batch over every target language.
    ///
    /// Loads the source document once, then translates and persists one
    /// language at a time with a pacing pause in between. Returns an error
    /// only when the source document cannot be loaded.
    pub async fn run(&self) -> Result<()> {
        let locales_dir = Path::new(&self.config.locales_dir);
        let source_path = FileManager::locale_path(locales_dir, &self.config.source_language);

        let source_document = FileManager::read_document(&source_path)
            .with_context(|| format!("Cannot load source document {:?}", source_path))?;

        let targets = self.target_languages(locales_dir)?;
        if targets.is_empty() {
            warn!("No target languages to translate, nothing to do");
            return Ok(());
        }

        info!(
            "Found {} target language(s): {}",
            targets.len(),
            targets.join(", ")
        );

        let progress = ProgressBar::new(targets.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );

        for (index, code) in targets.iter().enumerate() {
            progress.set_message(code.clone());
            info!(
                "Translating to {} ({})",
                language_utils::get_language_name(code),
                code
            );

            match self
                .translate_language(&source_document, code, locales_dir)
                .await
            {
                Ok(output_path) => info!("Saved {} translation to {:?}", code, output_path),
                Err(e) => error!("Skipping {}: {}", code, e),
            }

            progress.inc(1);

            if index + 1 < targets.len() {
                let delay = pacing::language_pacing();
                debug!(
                    "Waiting {:.1}s before the next language",
                    delay.as_secs_f64()
                );
                self.sleeper.sleep(delay).await;
            }
        }

        progress.finish_with_message("done");
        info!("All translations finished");
        Ok(())
    }

    /// Resolve the target language set: explicit configuration wins,
    /// otherwise targets are discovered from the locale files on disk
    fn target_languages(&self, locales_dir: &Path) -> Result<Vec<String>> {
        if !self.config.target_languages.is_empty() {
            return Ok(self.config.target_languages.clone());
        }

        FileManager::discover_target_languages(
            locales_dir,
            &self.config.source_language,
            &self.config.excluded_locales,
        )
    }

    /// Translate and persist one language's document
    async fn translate_language(
        &self,
        source_document: &Value,
        target_language: &str,
        locales_dir: &Path,
    ) -> Result<PathBuf, DocumentError> {
        let translated = self
            .translator
            .translate_document(source_document, target_language)
            .await?;

        let output_path = FileManager::locale_path(locales_dir, target_language);
        FileManager::write_document(&output_path, &translated)?;

        Ok(output_path)
    }
}
