//! REST-backed task ledger repository.

use crate::config::BackendConfig;
use crate::dto::TaskRow;
use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use harbor_core::task::{TaskRecord, TaskRepository};
use reqwest::Client;

/// Task ledger reads against the hosted backend's REST gateway.
///
/// Queries follow the gateway's filter syntax: `?user_id=eq.<id>` selects
/// one user's rows.
pub struct RestTaskRepository {
    client: Client,
    config: BackendConfig,
}

impl RestTaskRepository {
    /// Creates a repository over the given backend.
    pub fn new(config: BackendConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl TaskRepository for RestTaskRepository {
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<TaskRecord>> {
        let url = format!("{}/rest/v1/tasks", self.config.base_url);
        let filter = format!("eq.{user_id}");

        let response = self
            .client
            .get(&url)
            .query(&[("select", "*"), ("user_id", filter.as_str())])
            .header("apikey", &self.config.api_key)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .send()
            .await
            .context("task ledger request failed")?;

        if !response.status().is_success() {
            bail!(
                "task ledger returned HTTP {}",
                response.status().as_u16()
            );
        }

        let rows: Vec<TaskRow> = response
            .json()
            .await
            .context("failed to parse task ledger rows")?;

        tracing::debug!(
            "[RestTaskRepository] {} rows for user {}",
            rows.len(),
            user_id
        );

        Ok(rows.into_iter().map(TaskRecord::from).collect())
    }
}
