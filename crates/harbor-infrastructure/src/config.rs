//! Hosted backend configuration.

use harbor_core::{HarborError, Result};
use std::env;

/// Connection settings for the hosted data backend.
///
/// The same key is sent both as the `apikey` header and as a bearer token,
/// matching how the hosted backend's REST gateway authenticates anonymous
/// role clients.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL of the backend, without a trailing slash.
    pub base_url: String,
    /// API key for the REST gateway.
    pub api_key: String,
}

impl BackendConfig {
    /// Creates a configuration from explicit values.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Loads configuration from `HARBOR_BACKEND_URL` and
    /// `HARBOR_BACKEND_KEY` environment variables.
    pub fn try_from_env() -> Result<Self> {
        let base_url = env::var("HARBOR_BACKEND_URL").map_err(|_| {
            HarborError::config("HARBOR_BACKEND_URL not found in environment variables")
        })?;
        let api_key = env::var("HARBOR_BACKEND_KEY").map_err(|_| {
            HarborError::config("HARBOR_BACKEND_KEY not found in environment variables")
        })?;

        Ok(Self::new(base_url, api_key))
    }
}
