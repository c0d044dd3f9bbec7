/*!
 * Request pacing and retry backoff schedules.
 *
 * The tool is deliberately sequential; these jittered delays are its only
 * form of client-side rate limiting towards the provider. Sleeping goes
 * through the [`Sleeper`] trait so tests can observe the schedule without
 * real wall-clock waits.
 */

use async_trait::async_trait;
use rand::Rng;
use std::fmt::Debug;
use std::time::Duration;

/// Seconds added to the retry backoff per failed attempt
const RETRY_BACKOFF_STEP_SECS: f64 = 3.0;
/// Upper bound of the uniform jitter added to each retry backoff
const RETRY_BACKOFF_JITTER_SECS: f64 = 2.0;

/// Base delay between successive key translations within a document
const KEY_PACING_BASE_SECS: f64 = 0.5;
/// Upper bound of the uniform jitter added to the key pacing delay
const KEY_PACING_JITTER_SECS: f64 = 0.3;

/// Base delay between successive target languages
const LANGUAGE_PACING_BASE_SECS: f64 = 8.0;
/// Upper bound of the uniform jitter added to the language pacing delay
const LANGUAGE_PACING_JITTER_SECS: f64 = 3.0;

/// Backoff before retrying after the given 1-based failed attempt.
///
/// Strictly increasing with the attempt number, with jitter to
/// desynchronize repeated failures against a throttling provider.
pub fn retry_backoff(failed_attempt: u32) -> Duration {
    let secs = f64::from(failed_attempt) * RETRY_BACKOFF_STEP_SECS
        + rand::rng().random_range(0.0..RETRY_BACKOFF_JITTER_SECS);
    Duration::from_secs_f64(secs)
}

/// Pacing delay inserted between successive key translations.
pub fn key_pacing() -> Duration {
    Duration::from_secs_f64(
        KEY_PACING_BASE_SECS + rand::rng().random_range(0.0..KEY_PACING_JITTER_SECS),
    )
}

/// Pacing delay inserted between successive target languages.
pub fn language_pacing() -> Duration {
    Duration::from_secs_f64(
        LANGUAGE_PACING_BASE_SECS + rand::rng().random_range(0.0..LANGUAGE_PACING_JITTER_SECS),
    )
}

/// Abstraction over sleeping, so the retry and pacing logic can be
/// exercised in tests without waiting.
#[async_trait]
pub trait Sleeper: Send + Sync + Debug {
    /// Suspend the current task for the given duration
    async fn sleep(&self, duration: Duration);
}

/// Production sleeper backed by the tokio timer
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
