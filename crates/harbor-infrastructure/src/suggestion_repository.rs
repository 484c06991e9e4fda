//! REST-backed course suggestion repository.

use crate::config::BackendConfig;
use crate::dto::SuggestionRow;
use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use harbor_core::course::{SuggestionEntry, SuggestionRepository};
use reqwest::Client;

/// Suggestion reads against the hosted backend's REST gateway.
///
/// The suggestion table holds rows in two shapes (relational course joins
/// and historic JSON string arrays); malformed rows are logged and skipped
/// so one bad row never hides the rest of a user's suggestions.
pub struct RestSuggestionRepository {
    client: Client,
    config: BackendConfig,
}

impl RestSuggestionRepository {
    /// Creates a repository over the given backend.
    pub fn new(config: BackendConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl SuggestionRepository for RestSuggestionRepository {
    async fn list_for_employee(&self, employee_id: &str) -> Result<Vec<SuggestionEntry>> {
        let url = format!(
            "{}/rest/v1/employee_suggested_courses",
            self.config.base_url
        );
        let filter = format!("eq.{employee_id}");

        let response = self
            .client
            .get(&url)
            .query(&[
                (
                    "select",
                    "suggested_courses,courses(Title,Provider,\"Course Fee\",\"Upcoming Date\")",
                ),
                ("employee_id", filter.as_str()),
            ])
            .header("apikey", &self.config.api_key)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .send()
            .await
            .context("suggestion request failed")?;

        if !response.status().is_success() {
            bail!(
                "suggestion store returned HTTP {}",
                response.status().as_u16()
            );
        }

        let rows: Vec<SuggestionRow> = response
            .json()
            .await
            .context("failed to parse suggestion rows")?;

        let mut entries = Vec::new();
        for row in rows {
            match row.into_entries() {
                Ok(mut parsed) => entries.append(&mut parsed),
                Err(err) => {
                    tracing::warn!(
                        "[RestSuggestionRepository] Skipping suggestion row for {}: {}",
                        employee_id,
                        err
                    );
                }
            }
        }

        Ok(entries)
    }
}
