use async_trait::async_trait;
use eyre::{Result, bail};
use log::debug;
use serde::Serialize;

use crate::error::SummarizeError;

pub const DEFAULT_API_URL: &str = "https://api.cerebras.ai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "llama3.1-70b";
pub const API_KEY_ENV: &str = "CEREBRAS_API_KEY";

const MAX_OUTPUT_TOKENS: u32 = 2000;

/// Sampling parameters sent with every completion request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationParams {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl GenerationParams {
    /// Fixed token budget and fully deterministic sampling for the given model
    pub fn for_model(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            max_tokens: MAX_OUTPUT_TOKENS,
            temperature: 0.0,
        }
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self::for_model(DEFAULT_MODEL)
    }
}

/// LLM text generation endpoint
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, prompt: &str, params: &GenerationParams) -> Result<String, SummarizeError>;
}

/// Client for any OpenAI-compatible `/v1/chat/completions` endpoint
pub struct ChatCompletionsClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl ChatCompletionsClient {
    pub fn new(client: reqwest::Client, api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    async fn request(&self, prompt: &str, params: &GenerationParams) -> Result<String> {
        debug!("Requesting completion from {} with model {}", self.api_url, params.model);

        let body = request_body(prompt, params);

        let resp = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API returned {status}: {}", error_detail(&body));
        }

        let json: serde_json::Value = resp.json().await?;
        extract_message_text(&json)
    }
}

#[async_trait]
impl CompletionService for ChatCompletionsClient {
    async fn complete(&self, prompt: &str, params: &GenerationParams) -> Result<String, SummarizeError> {
        self.request(prompt, params)
            .await
            .map_err(|e| SummarizeError::CompletionFailed(format!("{e:#}")))
    }
}

fn request_body(prompt: &str, params: &GenerationParams) -> serde_json::Value {
    serde_json::json!({
        "model": params.model,
        "max_tokens": params.max_tokens,
        "temperature": params.temperature,
        "messages": [
            {
                "role": "user",
                "content": prompt
            }
        ]
    })
}

fn extract_message_text(json: &serde_json::Value) -> Result<String> {
    let text = json
        .get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|t| t.as_str());

    match text {
        Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
        Some(_) => bail!("completion API returned an empty message"),
        None => bail!("unexpected completion API response format"),
    }
}

/// Pull `error.message` out of an error body, or fall back to the raw text
fn error_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            let message = json
                .get("error")
                .and_then(|e| e.get("message"))
                .or_else(|| json.get("message"))?;
            message.as_str().map(|s| s.to_string())
        })
        .unwrap_or_else(|| body.trim().to_string())
}
