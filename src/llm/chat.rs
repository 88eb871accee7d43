//! Blocking chat-completions client.
//!
//! Speaks the OpenAI-compatible `/v1/chat/completions` wire shape; the
//! default endpoint is the Cerebras-hosted deployment the catalogs were
//! written against. HTTP status codes drive the transient/fatal split:
//! 429 is a rate limit, 502/503 is overload, everything else is fatal.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use super::{GenerationClient, GenerationRequest, ServiceError};

pub const DEFAULT_BASE_URL: &str = "https://api.cerebras.ai";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// HTTP client bound to one endpoint, key, and model for the whole run.
pub struct ChatClient {
    base_url: String,
    api_key: String,
    model: String,
    client: Client,
}

impl ChatClient {
    pub fn new(base_url: &str, api_key: String, model: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build generation HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
            client,
        })
    }

    fn classify_status(status: StatusCode, body: String) -> ServiceError {
        match status {
            StatusCode::TOO_MANY_REQUESTS => ServiceError::RateLimited(body),
            StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE => {
                ServiceError::Overloaded(format!("{status}: {body}"))
            }
            _ => ServiceError::Fatal(format!("{status}: {body}")),
        }
    }
}

impl GenerationClient for ChatClient {
    fn complete(&self, request: &GenerationRequest<'_>) -> Result<String, ServiceError> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage { role: "system", content: request.system },
                ChatMessage { role: "user", content: request.prompt },
            ],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        let resp = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(self.api_key.trim())
            .json(&body)
            .send()
            .map_err(|e| {
                // Transport failures carry no status to classify on
                ServiceError::Fatal(format!("chat completions call failed: {e}"))
            })?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp
                .text()
                .unwrap_or_else(|_| "<body unavailable>".to_string());
            return Err(Self::classify_status(status, text));
        }

        let parsed: ChatResponse = resp
            .json()
            .map_err(|e| ServiceError::Fatal(format!("failed to parse chat response: {e}")))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default();

        if content.is_empty() {
            return Err(ServiceError::Fatal("chat response missing message content".into()));
        }

        Ok(content)
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: usize,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}
