//! REST-backed course catalogue repository.

use crate::config::BackendConfig;
use crate::dto::CourseRow;
use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use harbor_core::course::{CourseQuery, CourseRecord, CourseRepository};
use reqwest::Client;

/// Course catalogue lookups against the hosted backend's REST gateway.
pub struct RestCourseRepository {
    client: Client,
    config: BackendConfig,
}

impl RestCourseRepository {
    /// Creates a repository over the given backend.
    pub fn new(config: BackendConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl CourseRepository for RestCourseRepository {
    async fn find(&self, query: &CourseQuery) -> Result<Option<CourseRecord>> {
        let url = format!("{}/rest/v1/courses", self.config.base_url);
        let title_filter = format!("eq.{}", query.title);
        let provider_filter = format!("eq.{}", query.provider);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("select", "*"),
                ("Title", title_filter.as_str()),
                ("Provider", provider_filter.as_str()),
            ])
            .header("apikey", &self.config.api_key)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .send()
            .await
            .context("course catalogue request failed")?;

        if !response.status().is_success() {
            bail!(
                "course catalogue returned HTTP {}",
                response.status().as_u16()
            );
        }

        let rows: Vec<CourseRow> = response
            .json()
            .await
            .context("failed to parse course rows")?;

        match rows.into_iter().next() {
            Some(row) => Ok(Some(CourseRecord::try_from(row)?)),
            None => Ok(None),
        }
    }
}
