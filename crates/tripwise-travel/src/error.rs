use thiserror::Error;

/// Outcome of a failed fetch attempt, or of the whole retry sequence.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("rate limited by {url}")]
    RateLimited { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    /// Connection, request-building or body-transfer failure.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A `reqwest` failure that fits none of the transient classes above.
    #[error("unexpected HTTP client error: {0}")]
    Unexpected(#[source] reqwest::Error),

    #[error("gave up after {attempts} attempts: {last}")]
    Exhausted {
        attempts: usize,
        #[source]
        last: Box<FetchError>,
    },
}

impl FetchError {
    /// Sorts a raw `reqwest` error into the variant the retry policy expects.
    pub(crate) fn from_reqwest(err: reqwest::Error, url: &str) -> Self {
        if err.is_timeout() {
            FetchError::Timeout {
                url: url.to_owned(),
            }
        } else if err.is_connect() || err.is_request() || err.is_body() {
            FetchError::Transport(err)
        } else {
            FetchError::Unexpected(err)
        }
    }
}

/// Errors raised while constructing the travel-data clients.
#[derive(Debug, Error)]
pub enum TravelError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("invalid value for header {name}: {reason}")]
    InvalidHeader { name: &'static str, reason: String },
}
