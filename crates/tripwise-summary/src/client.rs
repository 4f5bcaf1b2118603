//! Chat-completion client that turns trip data into a short travel summary.
//!
//! [`SummaryClient::generate_summary`] is total: without an API key, or on
//! any request failure, it returns [`default_summary`].

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tripwise_core::{Activity, AppConfig, Hotel};

use crate::error::SummaryError;
use crate::prompt::{build_user_prompt, default_summary, SYSTEM_PROMPT};

const MAX_TOKENS: u32 = 300;
const TEMPERATURE: f64 = 0.7;

/// Summary settings projected from [`AppConfig`].
#[derive(Clone)]
pub struct SummarySettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub request_timeout_secs: u64,
}

impl SummarySettings {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            api_key: config.openai_api_key.clone(),
            base_url: config.openai_base_url.clone(),
            model: config.openai_model.clone(),
            request_timeout_secs: config.summary_request_timeout_secs,
        }
    }
}

impl std::fmt::Debug for SummarySettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummarySettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f64,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

pub struct SummaryClient {
    client: reqwest::Client,
    api_key: Option<String>,
    url: String,
    model: String,
}

impl SummaryClient {
    /// # Errors
    ///
    /// Returns [`SummaryError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(settings: &SummarySettings) -> Result<Self, SummaryError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            api_key: settings.api_key.clone(),
            url: format!("{}/chat/completions", settings.base_url.trim_end_matches('/')),
            model: settings.model.clone(),
        })
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    /// Summary for the trip, from the model when possible.
    pub async fn generate_summary(
        &self,
        destination: &str,
        budget: u64,
        hotels: &[Hotel],
        activities: &[Activity],
    ) -> String {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::info!(destination, "no completion API key, using default summary");
            return default_summary(destination, budget, hotels, activities);
        };

        let prompt = build_user_prompt(destination, budget, hotels, activities);
        match self.complete(api_key, &prompt).await {
            Ok(summary) => summary,
            Err(err) => {
                tracing::warn!(destination, error = %err, "summary generation failed, using default summary");
                default_summary(destination, budget, hotels, activities)
            }
        }
    }

    /// Sends one chat completion and returns the trimmed first choice.
    async fn complete(&self, api_key: &str, prompt: &str) -> Result<String, SummaryError> {
        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;

        let parsed: ChatResponse =
            serde_json::from_str(&body).map_err(|e| SummaryError::Deserialize {
                context: "chat completion".to_string(),
                source: e,
            })?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(SummaryError::EmptyCompletion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(base_url: &str) -> SummarySettings {
        SummarySettings {
            api_key: Some("sk-test".to_string()),
            base_url: base_url.to_string(),
            model: "gpt-4o-mini".to_string(),
            request_timeout_secs: 30,
        }
    }

    #[test]
    fn url_joins_without_double_slash() {
        let client = SummaryClient::new(&settings("https://api.openai.com/v1/")).unwrap();
        assert_eq!(client.url, "https://api.openai.com/v1/chat/completions");
    }

    #[test]
    fn request_body_shape() {
        let request = ChatRequest {
            model: "gpt-4o-mini",
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: "plan it",
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "plan it");
        assert_eq!(json["max_tokens"], 300);
        assert_eq!(json["temperature"], 0.7);
    }

    #[test]
    fn debug_redacts_api_key() {
        let rendered = format!("{:?}", settings("https://api.openai.com/v1"));
        assert!(!rendered.contains("sk-test"));
    }
}
