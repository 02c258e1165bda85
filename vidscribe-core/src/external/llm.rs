//! Chat-completions client for blog generation.
//!
//! A single-request HTTP client against an OpenAI-compatible endpoint. The
//! core has no knowledge of prompt engineering beyond assembling the request
//! body; the prompt text comes from the generation stage.

use crate::config::GenerationConfig;
use crate::error::{CoreError, CoreResult};
use serde_json::json;
use std::time::Duration;

/// Request timeout. Generation of a full blog post over a long transcript
/// can take minutes on slower models.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// A text-generation backend.
pub trait LlmClient {
    /// Sends one prompt and returns the model's completion text.
    fn complete(&self, prompt: &str) -> CoreResult<String>;
}

/// Concrete implementation of [`LlmClient`] for OpenAI-compatible
/// chat-completions endpoints.
pub struct ChatCompletionClient {
    endpoint: String,
    api_key: String,
    model: String,
    temperature: f32,
    client: reqwest::blocking::Client,
}

impl ChatCompletionClient {
    /// Creates a client for the configured endpoint.
    pub fn new(config: &GenerationConfig, api_key: &str) -> CoreResult<Self> {
        if api_key.trim().is_empty() {
            return Err(CoreError::InvalidConfig(
                "generation requires an API key".to_string(),
            ));
        }
        if !config.endpoint.starts_with("http://") && !config.endpoint.starts_with("https://") {
            return Err(CoreError::InvalidConfig(format!(
                "invalid chat-completions endpoint: {}",
                config.endpoint
            )));
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                CoreError::GenerationFailed(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            api_key: api_key.to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            client,
        })
    }
}

impl LlmClient for ChatCompletionClient {
    fn complete(&self, prompt: &str) -> CoreResult<String> {
        let body = json!({
            "model": self.model,
            "temperature": self.temperature,
            "messages": [
                { "role": "user", "content": prompt }
            ],
        });

        log::debug!(
            "Sending chat completion request to {} (model '{}')",
            self.endpoint,
            self.model
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(|e| CoreError::GenerationFailed(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().unwrap_or_default();
            return Err(CoreError::GenerationFailed(format!(
                "endpoint returned {}: {}",
                status,
                detail.trim()
            )));
        }

        let payload: serde_json::Value = response
            .json()
            .map_err(|e| CoreError::GenerationFailed(format!("invalid response body: {e}")))?;

        payload["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| {
                CoreError::GenerationFailed(
                    "response contained no completion content".to_string(),
                )
            })
    }
}
