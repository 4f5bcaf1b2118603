use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// `USE_REAL_API` feature flag. Live travel data is only requested when
    /// this is set *and* `rapidapi_key` is present.
    pub use_real_api: bool,
    pub rapidapi_key: Option<String>,
    pub rapidapi_host: String,
    pub rapidapi_base_url: String,
    pub travel_request_timeout_secs: u64,
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub summary_request_timeout_secs: u64,
}

impl AppConfig {
    /// Returns `true` when both the feature flag and the API key allow live
    /// travel-data requests.
    #[must_use]
    pub fn live_travel_enabled(&self) -> bool {
        self.use_real_api && self.rapidapi_key.is_some()
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("use_real_api", &self.use_real_api)
            .field(
                "rapidapi_key",
                &self.rapidapi_key.as_ref().map(|_| "[redacted]"),
            )
            .field("rapidapi_host", &self.rapidapi_host)
            .field("rapidapi_base_url", &self.rapidapi_base_url)
            .field(
                "travel_request_timeout_secs",
                &self.travel_request_timeout_secs,
            )
            .field(
                "openai_api_key",
                &self.openai_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("openai_base_url", &self.openai_base_url)
            .field("openai_model", &self.openai_model)
            .field(
                "summary_request_timeout_secs",
                &self.summary_request_timeout_secs,
            )
            .finish()
    }
}
