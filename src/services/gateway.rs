use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value as JsonValue;
use std::time::Duration;

/// Failure modes of the external generative-text capability.
///
/// `MissingCredential` is a configuration problem and must never be masked
/// by fallback content; the other variants are availability problems that
/// callers degrade around.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("GEMINI_API_KEY is not set")]
    MissingCredential,

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream returned {status}: {body}")]
    Upstream { status: StatusCode, body: String },

    #[error("upstream response contained no candidate text")]
    EmptyResponse,
}

impl GatewayError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, GatewayError::MissingCredential)
    }
}

/// The injected "generate text from a prompt" capability.
///
/// No contract is assumed about the shape of the returned text; downstream
/// extraction treats it as unreliable free text.
#[async_trait]
pub trait TextGateway: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError>;
}

const GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

/// Production gateway backed by the Gemini generateContent REST API.
#[derive(Clone)]
pub struct GeminiGateway {
    client: Client,
    api_key: String,
    timeout: Duration,
}

impl GeminiGateway {
    pub fn new(api_key: String, client: Client, timeout: Duration) -> Self {
        Self {
            client,
            api_key,
            timeout,
        }
    }
}

#[async_trait]
impl TextGateway for GeminiGateway {
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        if self.api_key.is_empty() {
            return Err(GatewayError::MissingCredential);
        }

        let payload = serde_json::json!({
            "contents": [
                { "parts": [ { "text": prompt } ] }
            ]
        });

        let res = self
            .client
            .post(GEMINI_ENDPOINT)
            .query(&[("key", self.api_key.as_str())])
            .json(&payload)
            .timeout(self.timeout)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(GatewayError::Upstream { status, body });
        }

        let body: JsonValue = res.json().await?;

        let text = body
            .get("candidates")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("content"))
            .and_then(|c| c.get("parts"))
            .and_then(|p| p.as_array())
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
                    .collect::<Vec<_>>()
                    .concat()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(GatewayError::EmptyResponse);
        }
        Ok(text)
    }
}
