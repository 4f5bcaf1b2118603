//! Bounded retry with a fixed backoff schedule for travel API requests.
//!
//! Sleeping goes through the [`Sleeper`] trait so tests can record the
//! schedule instead of waiting on the wall clock.

use std::future::Future;
use std::time::Duration;

use crate::error::FetchError;

/// Total attempts per fetch, including the first.
pub const MAX_ATTEMPTS: usize = 3;

/// Base delay after attempt `n` (0-based). Rate-limited attempts wait twice as long.
pub const BACKOFF_MS: [u64; MAX_ATTEMPTS] = [500, 1_000, 2_000];

/// Async sleep used between attempts.
pub trait Sleeper: Send + Sync {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Production sleeper backed by `tokio::time::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}

/// Returns `true` if `err` is transient and worth another attempt.
///
/// [`FetchError::Deserialize`] and [`FetchError::Unexpected`] abort the
/// sequence immediately, as does an already-terminal [`FetchError::Exhausted`].
pub(crate) fn is_retriable(err: &FetchError) -> bool {
    matches!(
        err,
        FetchError::RateLimited { .. }
            | FetchError::UnexpectedStatus { .. }
            | FetchError::Timeout { .. }
            | FetchError::Transport(_)
    )
}

/// Delay to wait after the failed attempt at `attempt` (0-based).
pub(crate) fn backoff_delay(attempt: usize, err: &FetchError) -> Duration {
    let base = BACKOFF_MS[attempt.min(MAX_ATTEMPTS - 1)];
    let ms = if matches!(err, FetchError::RateLimited { .. }) {
        base * 2
    } else {
        base
    };
    Duration::from_millis(ms)
}

/// Runs `operation` up to [`MAX_ATTEMPTS`] times.
///
/// | Failed attempt | 429 wait | other transient wait |
/// |----------------|----------|----------------------|
/// | 1              | 1.0 s    | 0.5 s                |
/// | 2              | 2.0 s    | 1.0 s                |
/// | 3 (last)       | none     | none                 |
///
/// A transient failure on the last attempt yields [`FetchError::Exhausted`]
/// wrapping the final error. Non-retriable errors are returned as-is.
pub(crate) async fn retry_with_backoff<T, S, F, Fut>(
    sleeper: &S,
    mut operation: F,
) -> Result<T, FetchError>
where
    S: Sleeper,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, FetchError>>,
{
    let mut attempt = 0usize;
    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        if !is_retriable(&err) {
            return Err(err);
        }
        if attempt + 1 >= MAX_ATTEMPTS {
            return Err(FetchError::Exhausted {
                attempts: attempt + 1,
                last: Box::new(err),
            });
        }

        let delay = backoff_delay(attempt, &err);
        tracing::warn!(
            attempt = attempt + 1,
            max_attempts = MAX_ATTEMPTS,
            delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            error = %err,
            "travel API request failed, retrying after backoff"
        );
        sleeper.sleep(delay).await;
        attempt += 1;
    }
}
