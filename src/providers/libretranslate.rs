use anyhow::{Result, anyhow};
use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use crate::errors::ProviderError;
use crate::providers::TranslationProvider;

/// Client for a LibreTranslate-compatible translation API
#[derive(Debug)]
pub struct LibreTranslate {
    /// Base URL of the API
    endpoint: String,
    /// HTTP client for making requests
    client: Client,
    /// Optional API key sent with every request
    api_key: Option<String>,
}

/// Translation request body for the `/translate` endpoint
#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    /// Text to translate
    q: &'a str,
    /// Source language code
    source: &'a str,
    /// Target language code
    target: &'a str,
    /// Input format, always plain text
    format: &'a str,
    /// API key, omitted when the instance does not require one
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

/// Translation response from the `/translate` endpoint
#[derive(Debug, Deserialize)]
struct TranslateResponse {
    /// The translated text
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// Normalize an endpoint string into a base URL without a trailing slash
fn normalize_endpoint(endpoint: &str) -> Result<String> {
    if endpoint.is_empty() {
        return Err(anyhow!("Endpoint cannot be empty"));
    }

    let url = if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        Url::parse(endpoint)?
    } else {
        Url::parse(&format!("http://{}", endpoint))?
    };

    if url.host_str().is_none() {
        return Err(anyhow!("Invalid host in endpoint: {}", endpoint));
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}

impl LibreTranslate {
    /// Create a new client for the given endpoint
    ///
    /// # Arguments
    /// * `endpoint` - Base URL of the LibreTranslate instance
    /// * `api_key` - Optional API key, `None` for keyless instances
    /// * `timeout_secs` - Per-request timeout in seconds
    pub fn new(endpoint: &str, api_key: Option<String>, timeout_secs: u64) -> Result<Self> {
        let endpoint = normalize_endpoint(endpoint)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            endpoint,
            client,
            api_key,
        })
    }

    /// Map a non-success HTTP status to the matching provider error
    fn status_error(status_code: u16, message: String) -> ProviderError {
        match status_code {
            401 | 403 => ProviderError::AuthenticationError(message),
            429 => ProviderError::RateLimitExceeded(message),
            _ => ProviderError::ApiError {
                status_code,
                message,
            },
        }
    }
}

#[async_trait]
impl TranslationProvider for LibreTranslate {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, ProviderError> {
        let request = TranslateRequest {
            q: text,
            source: source_language,
            target: target_language,
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let response = self
            .client
            .post(format!("{}/translate", self.endpoint))
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Translation API error ({}): {}", status, error_text);
            return Err(Self::status_error(status.as_u16(), error_text));
        }

        let translate_response = response
            .json::<TranslateResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Ok(translate_response.translated_text)
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        let response = self
            .client
            .get(format!("{}/languages", self.endpoint))
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            return Err(Self::status_error(status.as_u16(), error_text));
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "LibreTranslate"
    }
}
