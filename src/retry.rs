//! Exponential backoff retry for remote calls.
//!
//! The wrapped operation performs the I/O and classifies its own failures:
//! a [`ClassifiedError::Retryable`] failure is retried after a delay that
//! doubles each time, a [`ClassifiedError::Stop`] failure is returned at once.
//! Either way the caller gets the unwrapped [`RemoteError`] back.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

use crate::error::RemoteError;
use crate::types::RemoteResponse;

/// A remote failure tagged with whether retrying can help.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifiedError {
    /// Transient failure (transport, 5xx). Retry while attempts remain.
    #[error("{0}")]
    Retryable(RemoteError),

    /// Non-retryable failure (4xx). Retrying cannot succeed.
    #[error("{0}")]
    Stop(RemoteError),
}

impl ClassifiedError {
    /// Whether this failure short-circuits the retry loop.
    pub const fn is_stop(&self) -> bool {
        matches!(self, Self::Stop(_))
    }

    /// The underlying cause, without the classification.
    pub fn into_cause(self) -> RemoteError {
        match self {
            Self::Retryable(e) | Self::Stop(e) => e,
        }
    }
}

/// Configuration for exponential backoff retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    /// Total number of attempts, including the first one. Values below 1
    /// are treated as 1.
    pub max_attempts: u32,

    /// Delay before the first retry. Doubles for each following retry.
    pub initial_delay: Duration,
}

impl RetryConfig {
    /// Default for GitHub API calls: 3 attempts, retried after 1s then 2s.
    pub const DEFAULT: Self = Self {
        max_attempts: 3,
        initial_delay: Duration::from_secs(1),
    };

    /// Creates a new retry configuration.
    pub const fn new(max_attempts: u32, initial_delay: Duration) -> Self {
        Self {
            max_attempts,
            initial_delay,
        }
    }

    /// Delay slept before retry number `retry` (0-indexed):
    /// `initial_delay * 2^retry`, saturating instead of overflowing.
    pub fn delay_for_retry(&self, retry: u32) -> Duration {
        let factor = 2u32.checked_pow(retry).unwrap_or(u32::MAX);
        self.initial_delay.saturating_mul(factor)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Executes a remote operation with retry.
///
/// The operation is invoked once. A success or a [`ClassifiedError::Stop`]
/// failure is returned immediately. A retryable failure is retried after
/// sleeping, with the delay doubling each time, until `max_attempts` calls
/// have been made; the last response is then returned with its error intact.
pub async fn execute<F, Fut>(config: RetryConfig, mut operation: F) -> RemoteResponse
where
    F: FnMut() -> Fut,
    Fut: Future<Output = RemoteResponse<ClassifiedError>>,
{
    let max_attempts = config.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        let response = operation().await;

        let Some(error) = &response.error else {
            return response.map_error(ClassifiedError::into_cause);
        };

        if error.is_stop() {
            debug!(attempt, %error, "remote call failed, not retrying");
            return response.map_error(ClassifiedError::into_cause);
        }

        if attempt >= max_attempts {
            warn!(attempts = attempt, %error, "remote call failed, retries exhausted");
            return response.map_error(ClassifiedError::into_cause);
        }

        let delay = config.delay_for_retry(attempt - 1);
        debug!(attempt, %error, ?delay, "remote call failed, retrying");
        tokio::time::sleep(delay).await;
        attempt += 1;
    }
}
