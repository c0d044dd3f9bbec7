/*!
 * # YALTwAI - Yet Another Locale Translator with AI
 *
 * A Rust library for batch translation of JSON locale files.
 *
 * ## Features
 *
 * - Translate nested locale documents while preserving their exact shape
 * - Protect `{placeholder}` template variables from the translator
 * - Retry transient provider failures with jittered backoff
 * - Degrade gracefully: untranslatable strings keep their original text
 * - Discover target languages from the locale files on disk
 * - Paced, strictly sequential requests to respect provider rate limits
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `placeholder`: Placeholder protection for template variables
 * - `translation_service`: Resilient single-string translation
 * - `document`: Recursive translation of locale documents
 * - `app_controller`: Batch orchestration across target languages
 * - `pacing`: Backoff and pacing schedules, injectable sleeping
 * - `file_utils`: Locale file discovery and atomic persistence
 * - `language_utils`: Locale code utilities
 * - `providers`: Client implementations for translation backends:
 *   - `providers::libretranslate`: LibreTranslate-compatible API client
 *   - `providers::mock`: Configurable mock provider for tests
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod document;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod pacing;
pub mod placeholder;
pub mod providers;
pub mod translation_service;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use document::DocumentTranslator;
pub use errors::{AppError, DocumentError, ProviderError};
pub use language_utils::{get_language_name, language_codes_match, validate_language_code};
pub use translation_service::TranslationService;
