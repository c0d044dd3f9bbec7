/*!
 * Error types for the yaltwai application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when talking to a translation provider.
///
/// These are transient per-attempt failures; the translation service
/// recovers from them with retries and, after exhaustion, by keeping the
/// original text.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when sending an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error related to rate limiting
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors that can occur while producing or persisting one locale document.
///
/// `Read` and `Parse` on the source document are fatal to the whole run;
/// everything else is recovered per language by the batch controller.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Error reading a document from disk
    #[error("Failed to read document: {0}")]
    Read(String),

    /// Error parsing a document as JSON
    #[error("Failed to parse document: {0}")]
    Parse(String),

    /// Error serializing a translated document
    #[error("Failed to serialize document: {0}")]
    Serialize(String),

    /// Error writing a translated document to disk
    #[error("Failed to write document: {0}")]
    Write(String),

    /// Error translating a single node of a document
    #[error("Failed to translate node: {0}")]
    Node(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from document processing
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// Error in configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
