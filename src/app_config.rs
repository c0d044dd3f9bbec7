use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::language_utils;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language code (ISO), the language of the reference locale file
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Directory containing the locale JSON files
    #[serde(default = "default_locales_dir")]
    pub locales_dir: String,

    /// Locale codes that are maintained by hand and never overwritten
    #[serde(default = "default_excluded_locales")]
    pub excluded_locales: Vec<String>,

    /// Explicit target language codes; when empty, targets are discovered
    /// from the locale files present in the locales directory
    #[serde(default)]
    pub target_languages: Vec<String>,

    /// Translation provider config
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Translation provider configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    // @field: Service URL of a LibreTranslate-compatible instance
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    // @field: API key, empty for keyless instances
    #[serde(default = "String::new")]
    pub api_key: String,

    // @field: Provider attempts per string before keeping the original
    #[serde(default = "default_retry_count")]
    pub retry_count: u32,

    // @field: Timeout seconds per request
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: String::new(),
            retry_count: default_retry_count(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Log level for the application
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Error level
    Error,
    /// Warning level
    Warn,
    /// Info level
    #[default]
    Info,
    /// Debug level
    Debug,
    /// Trace level
    Trace,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_language: default_source_language(),
            locales_dir: default_locales_dir(),
            excluded_locales: default_excluded_locales(),
            target_languages: Vec::new(),
            translation: TranslationConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.source_language.trim().is_empty() {
            return Err(anyhow!("Source language cannot be empty"));
        }

        if self.locales_dir.trim().is_empty() {
            return Err(anyhow!("Locales directory cannot be empty"));
        }

        if self.translation.endpoint.trim().is_empty() {
            return Err(anyhow!("Translation endpoint cannot be empty"));
        }

        if self.translation.retry_count == 0 {
            return Err(anyhow!("Retry count must be at least 1"));
        }

        for target in &self.target_languages {
            if target.trim().is_empty() {
                return Err(anyhow!("Target language codes cannot be empty"));
            }

            // Variants of the source count too: "en-US" or "eng" for "en"
            if language_utils::language_codes_match(target, &self.source_language) {
                return Err(anyhow!(
                    "Target language '{}' is the same as the source language",
                    target
                ));
            }
        }

        Ok(())
    }
}

fn default_source_language() -> String {
    "en".to_string()
}

fn default_locales_dir() -> String {
    "src/locales".to_string()
}

fn default_excluded_locales() -> Vec<String> {
    // Hand-maintained locales that must never be machine-translated over
    ["en", "ru", "be", "ar", "es"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_endpoint() -> String {
    "http://localhost:5000".to_string()
}

fn default_retry_count() -> u32 {
    3
}

fn default_timeout_secs() -> u64 {
    30
}
