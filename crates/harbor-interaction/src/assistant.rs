//! Assistant identity resolver.
//!
//! Fetches the display name of the assistant persona once per session. The
//! lookup is best-effort: a failure leaves the name unresolved and the chat
//! fully usable.

use crate::config::CompletionConfig;
use async_trait::async_trait;
use harbor_core::{HarborError, Result};
use reqwest::Client;
use serde::Deserialize;

/// Display name used when the assistant record carries no name.
pub const UNNAMED_ASSISTANT: &str = "Unnamed Assistant";

/// Resolves assistant identifiers to display names.
#[async_trait]
pub trait AssistantDirectory: Send + Sync {
    /// Resolves the display name for an assistant.
    async fn resolve_name(&self, assistant_id: &str) -> Result<String>;
}

/// Directory implementation backed by the assistants metadata endpoint.
#[derive(Clone)]
pub struct OpenAiAssistantDirectory {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiAssistantDirectory {
    /// Creates a directory client from the given configuration.
    pub fn new(config: &CompletionConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
        }
    }
}

#[async_trait]
impl AssistantDirectory for OpenAiAssistantDirectory {
    async fn resolve_name(&self, assistant_id: &str) -> Result<String> {
        let url = format!("{}/assistants/{}", self.base_url, assistant_id);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("OpenAI-Beta", "assistants=v2")
            .send()
            .await
            .map_err(|err| HarborError::completion(format!("assistant lookup failed: {err}")))?;

        if !response.status().is_success() {
            return Err(HarborError::completion(format!(
                "assistant lookup returned HTTP {}",
                response.status().as_u16()
            )));
        }

        let assistant: AssistantObject = response.json().await.map_err(|err| {
            HarborError::completion(format!("failed to parse assistant record: {err}"))
        })?;

        Ok(assistant
            .name
            .unwrap_or_else(|| UNNAMED_ASSISTANT.to_string()))
    }
}

#[derive(Deserialize)]
struct AssistantObject {
    name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_name_falls_back() {
        let assistant: AssistantObject = serde_json::from_str(r#"{"id":"asst_1"}"#).unwrap();
        assert_eq!(
            assistant.name.unwrap_or_else(|| UNNAMED_ASSISTANT.to_string()),
            UNNAMED_ASSISTANT
        );
    }

    #[test]
    fn test_named_assistant() {
        let assistant: AssistantObject =
            serde_json::from_str(r#"{"id":"asst_1","name":"HarborBot"}"#).unwrap();
        assert_eq!(assistant.name.as_deref(), Some("HarborBot"));
    }
}
