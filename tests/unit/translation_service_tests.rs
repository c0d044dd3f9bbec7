/*!
 * Tests for the resilient translation service
 */

use std::sync::Arc;

use crate::common::{RecordingSleeper, service_with};
use yaltwai::providers::mock::MockProvider;

/// Test that empty text never reaches the provider
#[tokio::test]
async fn test_translateText_withEmptyText_shouldSkipProvider() {
    let provider = Arc::new(MockProvider::failing());
    let service = service_with(provider.clone(), RecordingSleeper::new(), 3);

    let result = service.translate_text("", "fr").await;
    assert_eq!(result, "");
    assert_eq!(provider.call_count(), 0);
}

/// Test that whitespace-only text never reaches the provider and is
/// returned verbatim
#[tokio::test]
async fn test_translateText_withWhitespaceOnlyText_shouldSkipProvider() {
    let provider = Arc::new(MockProvider::failing());
    let service = service_with(provider.clone(), RecordingSleeper::new(), 3);

    let result = service.translate_text("   ", "fr").await;
    assert_eq!(result, "   ");
    assert_eq!(provider.call_count(), 0);
}

/// Test a provider that succeeds on the first attempt
#[tokio::test]
async fn test_translateText_withWorkingProvider_shouldTranslateInOneCall() {
    let provider = Arc::new(MockProvider::working());
    let sleeper = RecordingSleeper::new();
    let service = service_with(provider.clone(), sleeper.clone(), 3);

    let result = service.translate_text("Hello", "fr").await;
    assert_eq!(result, "[fr] Hello");
    assert_eq!(provider.call_count(), 1);
    assert!(sleeper.sleeps().is_empty());
}

/// Test that k transient failures followed by a success make exactly
/// k+1 provider calls
#[tokio::test]
async fn test_translateText_withTwoTransientFailures_shouldSucceedOnThirdCall() {
    let provider = Arc::new(MockProvider::fail_first(2));
    let sleeper = RecordingSleeper::new();
    let service = service_with(provider.clone(), sleeper.clone(), 3);

    let result = service.translate_text("Hello", "fr").await;
    assert_eq!(result, "[fr] Hello");
    assert_eq!(provider.call_count(), 3);

    // One backoff sleep per failed attempt that had retries remaining
    let sleeps = sleeper.sleeps();
    assert_eq!(sleeps.len(), 2);

    // attempt * 3 + uniform(0, 2) seconds, attempt being 1-based
    assert!(sleeps[0].as_secs_f64() >= 3.0 && sleeps[0].as_secs_f64() < 5.0);
    assert!(sleeps[1].as_secs_f64() >= 6.0 && sleeps[1].as_secs_f64() < 8.0);
}

/// Test degradation to the original text when every attempt fails
#[tokio::test]
async fn test_translateText_withAlwaysFailingProvider_shouldReturnOriginal() {
    let provider = Arc::new(MockProvider::failing());
    let sleeper = RecordingSleeper::new();
    let service = service_with(provider.clone(), sleeper.clone(), 3);

    let result = service.translate_text("Hello {name}!", "fr").await;
    assert_eq!(result, "Hello {name}!");
    assert_eq!(provider.call_count(), 3);
    assert_eq!(sleeper.sleeps().len(), 2);
}

/// Test that placeholders survive a provider that rewrites the text
#[tokio::test]
async fn test_translateText_withPlaceholders_shouldRestoreThemVerbatim() {
    let provider = Arc::new(MockProvider::uppercasing());
    let service = service_with(provider.clone(), RecordingSleeper::new(), 3);

    let result = service.translate_text("Hello {name}, bye {name}!", "de").await;
    assert_eq!(result, "HELLO {name}, BYE {name}!");
}

/// Test that the provider receives masked text, never raw placeholders
#[tokio::test]
async fn test_translateText_shouldSendMaskedTextToProvider() {
    let provider = Arc::new(MockProvider::working().with_custom_response(
        |text, _source, _target| {
            assert!(!text.contains("{count}"));
            assert!(text.contains("__VAR_0__"));
            text.to_string()
        },
    ));
    let service = service_with(provider, RecordingSleeper::new(), 3);

    let result = service.translate_text("{count} items", "fr").await;
    assert_eq!(result, "{count} items");
}

/// Test that a single retry budget makes exactly one attempt and no sleeps
#[tokio::test]
async fn test_translateText_withSingleRetryBudget_shouldNotSleep() {
    let provider = Arc::new(MockProvider::failing());
    let sleeper = RecordingSleeper::new();
    let service = service_with(provider.clone(), sleeper.clone(), 1);

    let result = service.translate_text("Hello", "fr").await;
    assert_eq!(result, "Hello");
    assert_eq!(provider.call_count(), 1);
    assert!(sleeper.sleeps().is_empty());
}
