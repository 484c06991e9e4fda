//! Completion endpoint configuration.
//!
//! Configuration is explicit: values are constructed and handed to the
//! clients, never read from module-level globals. `try_from_env` exists as
//! a convenience for hosts that keep credentials in the environment.

use harbor_core::{HarborError, Result};
use std::env;

/// Default completion model used when none is configured.
pub const DEFAULT_COMPLETION_MODEL: &str = "gpt-3.5-turbo";

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Configuration for the completion and assistant-metadata endpoints.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    /// API key sent as a bearer token.
    pub api_key: String,
    /// Model identifier for completion requests.
    pub model: String,
    /// Base URL of the API, without a trailing slash.
    pub base_url: String,
}

impl CompletionConfig {
    /// Creates a configuration with the default model and base URL.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_COMPLETION_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Overrides the base URL after construction.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Loads configuration from environment variables.
    ///
    /// `OPENAI_API_KEY` is required; `OPENAI_MODEL_NAME` overrides the
    /// default model when set.
    pub fn try_from_env() -> Result<Self> {
        let api_key = env::var("OPENAI_API_KEY").map_err(|_| {
            HarborError::config("OPENAI_API_KEY not found in environment variables")
        })?;

        let model =
            env::var("OPENAI_MODEL_NAME").unwrap_or_else(|_| DEFAULT_COMPLETION_MODEL.into());

        Ok(Self::new(api_key).with_model(model))
    }
}
