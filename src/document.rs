/*!
 * Recursive translation of locale documents.
 *
 * A locale document is an arbitrarily nested JSON tree. The walker visits
 * every node, delegates string leaves to the translation service, and
 * leaves every other scalar untouched. The output tree always mirrors the
 * input tree shape: same keys in the same order, same array lengths, same
 * non-string values. A failure while translating one node falls back to
 * that node's original value without aborting its siblings.
 */

use log::warn;
use serde_json::{Map, Value};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::errors::DocumentError;
use crate::pacing::{self, Sleeper};
use crate::translation_service::TranslationService;

/// Unwrap a per-node translation result, keeping the original value on
/// failure. This is the fallback policy applied at every recursion level.
pub fn value_or_original(result: Result<Value, DocumentError>, original: &Value) -> Value {
    match result {
        Ok(value) => value,
        Err(e) => {
            warn!("Keeping original value after node failure: {}", e);
            original.clone()
        }
    }
}

/// Translates whole locale documents one node at a time
pub struct DocumentTranslator {
    /// String translation service
    service: TranslationService,

    /// Sleep implementation for pacing between keys
    sleeper: Arc<dyn Sleeper>,
}

impl DocumentTranslator {
    /// Create a new document translator
    pub fn new(service: TranslationService, sleeper: Arc<dyn Sleeper>) -> Self {
        Self { service, sleeper }
    }

    /// Translate a full document into the target language.
    ///
    /// The returned document has exactly the shape of the input; only
    /// string leaves may differ in value.
    pub async fn translate_document(
        &self,
        document: &Value,
        target_language: &str,
    ) -> Result<Value, DocumentError> {
        self.translate_node(document, target_language).await
    }

    /// Translate one node, dispatching on its JSON kind.
    ///
    /// Boxed because async recursion needs an indirection for the
    /// recursive future type.
    fn translate_node<'a>(
        &'a self,
        node: &'a Value,
        target_language: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Value, DocumentError>> + Send + 'a>> {
        Box::pin(async move {
            match node {
                Value::Object(map) => {
                    let mut translated = Map::with_capacity(map.len());
                    for (key, value) in map {
                        let result = self.translate_node(value, target_language).await;
                        translated.insert(key.clone(), value_or_original(result, value));

                        // Throttle the request rate towards the provider
                        self.sleeper.sleep(pacing::key_pacing()).await;
                    }
                    Ok(Value::Object(translated))
                }

                Value::Array(items) => {
                    let mut translated = Vec::with_capacity(items.len());
                    for item in items {
                        let result = self.translate_node(item, target_language).await;
                        translated.push(value_or_original(result, item));
                    }
                    Ok(Value::Array(translated))
                }

                Value::String(text) => Ok(Value::String(
                    self.service.translate_text(text, target_language).await,
                )),

                // Numbers, booleans and null pass through, no delay incurred
                other => Ok(other.clone()),
            }
        })
    }
}
