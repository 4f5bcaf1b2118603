use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryError {
    /// Network failure or non-2xx status from the completion endpoint.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("completion response contained no text")]
    EmptyCompletion,
}
