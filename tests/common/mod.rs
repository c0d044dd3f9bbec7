/*!
 * Common test utilities shared across the test suite
 */

use async_trait::async_trait;
use serde_json::{Value, json};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use yaltwai::app_config::Config;
use yaltwai::pacing::Sleeper;
use yaltwai::providers::TranslationProvider;
use yaltwai::translation_service::TranslationService;

/// Sleeper that records every requested delay and returns immediately,
/// so retry and pacing schedules can be asserted without waiting
#[derive(Debug, Default)]
pub struct RecordingSleeper {
    sleeps: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    /// Create a new recording sleeper behind an Arc
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// All delays requested so far, in order
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
    }
}

/// Build a translation service around an injected provider and sleeper
pub fn service_with(
    provider: Arc<dyn TranslationProvider>,
    sleeper: Arc<dyn Sleeper>,
    retry_count: u32,
) -> TranslationService {
    TranslationService::new(provider, sleeper, "en", retry_count)
}

/// Configuration pointing at a test locales directory
pub fn test_config(locales_dir: &Path) -> Config {
    let mut config = Config::default();
    config.locales_dir = locales_dir.to_string_lossy().to_string();
    config
}

/// The nested sample document used by the end-to-end tests
pub fn sample_document() -> Value {
    json!({
        "greeting": "Hello {name}!",
        "count": 3,
        "items": ["a {x}", "b"]
    })
}

/// The sample document as translated by the uppercasing mock provider
pub fn sample_document_uppercased() -> Value {
    json!({
        "greeting": "HELLO {name}!",
        "count": 3,
        "items": ["A {x}", "B"]
    })
}
