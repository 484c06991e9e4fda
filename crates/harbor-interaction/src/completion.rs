//! Completion endpoint client.
//!
//! The chat session speaks to the completion API through the
//! [`CompletionClient`] trait; [`OpenAiCompletionClient`] is the REST
//! implementation against the Chat Completions endpoint.

use crate::config::CompletionConfig;
use async_trait::async_trait;
use harbor_core::{HarborError, Result};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

/// The role of one turn in a completion request payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    /// The fixed persona instruction.
    System,
    /// A user message from the transcript.
    User,
    /// An assistant message from the transcript.
    Assistant,
}

/// One (role, content) pair in a completion request payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatTurn {
    /// The role of the turn's author.
    pub role: TurnRole,
    /// The content of the turn.
    pub content: String,
}

impl ChatTurn {
    /// Creates a turn.
    pub fn new(role: TurnRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// A client for the external completion endpoint.
///
/// Takes the ordered request payload and a model identifier; returns the
/// content of the first candidate reply, or an error when the call fails
/// or yields no candidates.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Requests a completion for the given ordered turns.
    async fn complete(&self, model: &str, turns: &[ChatTurn]) -> Result<String>;
}

/// Client implementation that talks to the OpenAI-compatible HTTP API.
#[derive(Clone)]
pub struct OpenAiCompletionClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiCompletionClient {
    /// Creates a client from the given configuration.
    pub fn new(config: &CompletionConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
        }
    }

    async fn send_request(&self, body: &ChatCompletionRequest<'_>) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|err| HarborError::completion(format!("request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|err| HarborError::completion(format!("failed to parse response: {err}")))?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompletionClient {
    async fn complete(&self, model: &str, turns: &[ChatTurn]) -> Result<String> {
        let request = ChatCompletionRequest {
            model,
            messages: turns,
        };

        self.send_request(&request).await
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatTurn],
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

fn extract_text_response(response: ChatCompletionResponse) -> Result<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| HarborError::completion("API returned no choices in the response"))
}

fn map_http_error(status: StatusCode, body: String) -> HarborError {
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|wrapper| wrapper.error.message)
        .unwrap_or(body);

    HarborError::completion(format!("HTTP {}: {}", status.as_u16(), message))
}
