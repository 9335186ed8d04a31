//! Core `ChatClient` trait and `ApiClient` implementation.
//!
//! `ApiClient` calls any OpenAI-compatible `/chat/completions` endpoint,
//! Upstage by default.  Connection details come from [`LlmConfig`] and the
//! key from [`ApiKey`]; nothing is read from the environment here.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::{ApiKey, LlmConfig};
use crate::llm::wire::{ChatRequest, ChatResponse};

/// Longest slice of an error body kept in [`LlmError::Status`].
const MAX_ERROR_BODY_CHARS: usize = 200;

// ---------------------------------------------------------------------------
// LlmError
// ---------------------------------------------------------------------------

/// Errors that can occur during a single completion call.
///
/// Every variant is recoverable at the row level.
#[derive(Debug, Error)]
pub enum LlmError {
    /// HTTP transport or connection error.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("LLM request timed out")]
    Timeout,

    /// The endpoint answered with a non-success status (auth, quota, rate
    /// limit, server error).
    #[error("API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The HTTP response could not be parsed as expected JSON.
    #[error("failed to parse LLM response: {0}")]
    Parse(String),

    /// The response contained no completion choices.
    #[error("LLM response contained no choices")]
    NoChoices,

    /// The first choice carried no `content` field (missing or `null`).
    #[error("LLM response had no message content")]
    EmptyResponse,
}

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            LlmError::Timeout
        } else {
            LlmError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// ChatClient trait
// ---------------------------------------------------------------------------

/// Async trait for one chat-completion round trip.
///
/// Returns the trimmed content of the first choice.  Implementors must be
/// `Send + Sync` so a single client can serve several in-flight rows.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError>;
}

// ---------------------------------------------------------------------------
// ApiClient
// ---------------------------------------------------------------------------

/// Calls an OpenAI-compatible `{base_url}/chat/completions` endpoint with
/// bearer authentication.
pub struct ApiClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: ApiKey,
}

impl ApiClient {
    /// Build an `ApiClient` from application config and a resolved key.
    ///
    /// The HTTP client carries the per-request timeout from
    /// `config.timeout_secs`.  A default client is used if the builder
    /// fails.
    pub fn from_config(config: &LlmConfig, api_key: ApiKey) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            endpoint: completions_url(&config.base_url),
            api_key,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ChatClient for ApiClient {
    async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Status {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Parse(e.to_string()))?;

        parsed.into_text()
    }
}

fn completions_url(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
