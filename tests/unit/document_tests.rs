/*!
 * Tests for the recursive document walker
 */

use serde_json::{Value, json};
use std::sync::Arc;

use crate::common::{
    RecordingSleeper, sample_document, sample_document_uppercased, service_with,
};
use yaltwai::document::{DocumentTranslator, value_or_original};
use yaltwai::errors::DocumentError;
use yaltwai::providers::mock::MockProvider;

fn translator_with(
    provider: Arc<MockProvider>,
    sleeper: Arc<RecordingSleeper>,
) -> DocumentTranslator {
    let service = service_with(provider, sleeper.clone(), 3);
    DocumentTranslator::new(service, sleeper)
}

/// Test the sample end-to-end document against the uppercasing provider
#[tokio::test]
async fn test_translateDocument_withNestedDocument_shouldTranslateStringsOnly() {
    let translator = translator_with(
        Arc::new(MockProvider::uppercasing()),
        RecordingSleeper::new(),
    );

    let translated = translator
        .translate_document(&sample_document(), "de")
        .await
        .unwrap();

    assert_eq!(translated, sample_document_uppercased());
}

/// Test that the output tree shape exactly mirrors the input
#[tokio::test]
async fn test_translateDocument_shouldPreserveTreeShape() {
    let document = json!({
        "title": "Welcome",
        "menu": {
            "items": ["Home", "About", "Contact"],
            "visible": true,
            "depth": 2
        },
        "footer": null,
        "ratio": 0.5
    });

    let translator = translator_with(
        Arc::new(MockProvider::uppercasing()),
        RecordingSleeper::new(),
    );
    let translated = translator.translate_document(&document, "fr").await.unwrap();

    // Keys, in the same order
    let original_keys: Vec<&String> = document.as_object().unwrap().keys().collect();
    let translated_keys: Vec<&String> = translated.as_object().unwrap().keys().collect();
    assert_eq!(original_keys, translated_keys);

    // Non-string leaves unchanged
    assert_eq!(translated["menu"]["visible"], json!(true));
    assert_eq!(translated["menu"]["depth"], json!(2));
    assert_eq!(translated["footer"], Value::Null);
    assert_eq!(translated["ratio"], json!(0.5));

    // Array length unchanged, strings translated
    assert_eq!(
        translated["menu"]["items"],
        json!(["HOME", "ABOUT", "CONTACT"])
    );
}

/// Test that a key order far from alphabetical survives translation
#[tokio::test]
async fn test_translateDocument_shouldPreserveKeyOrder() {
    let document = json!({
        "zebra": "z",
        "apple": "a",
        "mango": "m"
    });

    let translator = translator_with(
        Arc::new(MockProvider::uppercasing()),
        RecordingSleeper::new(),
    );
    let translated = translator.translate_document(&document, "fr").await.unwrap();

    let keys: Vec<&String> = translated.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["zebra", "apple", "mango"]);
}

/// Test that one pacing delay is recorded per object key
#[tokio::test]
async fn test_translateDocument_shouldPaceBetweenKeys() {
    let document = json!({
        "first": "one",
        "second": "two",
        "third": 3
    });

    let sleeper = RecordingSleeper::new();
    let translator = translator_with(Arc::new(MockProvider::working()), sleeper.clone());
    translator.translate_document(&document, "fr").await.unwrap();

    let sleeps = sleeper.sleeps();
    assert_eq!(sleeps.len(), 3);
    for sleep in sleeps {
        let secs = sleep.as_secs_f64();
        assert!(secs >= 0.5 && secs < 0.8, "pacing delay out of range: {}", secs);
    }
}

/// Test that arrays incur no pacing delays
#[tokio::test]
async fn test_translateDocument_withArrayRoot_shouldNotPace() {
    let document = json!(["one", "two", "three"]);

    let sleeper = RecordingSleeper::new();
    let translator = translator_with(Arc::new(MockProvider::working()), sleeper.clone());
    let translated = translator.translate_document(&document, "fr").await.unwrap();

    assert_eq!(translated, json!(["[fr] one", "[fr] two", "[fr] three"]));
    assert!(sleeper.sleeps().is_empty());
}

/// Test that a failing provider degrades every string to its original,
/// leaving the document shape intact
#[tokio::test]
async fn test_translateDocument_withFailingProvider_shouldKeepOriginalDocument() {
    let document = sample_document();

    let translator = translator_with(Arc::new(MockProvider::failing()), RecordingSleeper::new());
    let translated = translator.translate_document(&document, "fr").await.unwrap();

    assert_eq!(translated, document);
}

/// Test the explicit per-node fallback policy
#[test]
fn test_valueOrOriginal_withError_shouldReturnOriginal() {
    let original = json!("Hello");
    let result: Result<Value, DocumentError> =
        Err(DocumentError::Node("simulated".to_string()));
    assert_eq!(value_or_original(result, &original), original);
}

#[test]
fn test_valueOrOriginal_withOk_shouldReturnTranslated() {
    let original = json!("Hello");
    let result: Result<Value, DocumentError> = Ok(json!("Bonjour"));
    assert_eq!(value_or_original(result, &original), json!("Bonjour"));
}
