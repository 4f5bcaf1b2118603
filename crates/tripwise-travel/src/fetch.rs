//! HTTP GET with bounded retries, returning the parsed JSON payload.

use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode, Url};

use crate::error::{FetchError, TravelError};
use crate::retry::{retry_with_backoff, Sleeper, TokioSleeper};

const USER_AGENT: &str = "tripwise/0.1 (travel-planner)";
const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Issues GET requests and retries transient failures on the fixed schedule
/// in [`crate::retry`]. Only HTTP 200 counts as success.
pub struct RetryingFetcher<S = TokioSleeper> {
    client: Client,
    sleeper: S,
}

impl RetryingFetcher<TokioSleeper> {
    /// # Errors
    ///
    /// Returns [`TravelError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(timeout_secs: u64) -> Result<Self, TravelError> {
        Self::with_sleeper(timeout_secs, TokioSleeper)
    }
}

impl<S: Sleeper> RetryingFetcher<S> {
    /// Creates a fetcher with a custom sleeper (tests record the backoff
    /// schedule this way).
    ///
    /// # Errors
    ///
    /// Returns [`TravelError::Http`] if the `reqwest::Client` cannot be built.
    pub fn with_sleeper(timeout_secs: u64, sleeper: S) -> Result<Self, TravelError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client, sleeper })
    }

    /// Fetches `url` and parses the body as JSON.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Exhausted`] when every attempt failed transiently.
    /// - [`FetchError::Deserialize`] if a 200 response is not valid JSON.
    /// - [`FetchError::Unexpected`] for unclassified client errors.
    pub async fn fetch(
        &self,
        url: &Url,
        headers: &HeaderMap,
    ) -> Result<serde_json::Value, FetchError> {
        retry_with_backoff(&self.sleeper, move || self.fetch_once(url, headers)).await
    }

    async fn fetch_once(
        &self,
        url: &Url,
        headers: &HeaderMap,
    ) -> Result<serde_json::Value, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .headers(headers.clone())
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(e, url.as_str()))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(FetchError::RateLimited {
                url: url.to_string(),
            });
        }
        if status != StatusCode::OK {
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(e, url.as_str()))?;
        serde_json::from_str(&body).map_err(|e| FetchError::Deserialize {
            context: url.path().to_string(),
            source: e,
        })
    }
}
