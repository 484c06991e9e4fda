//! Course advising use case.
//!
//! Resolves a user's stored course suggestions, in either backend shape,
//! into full catalogue records for display.

use harbor_core::auth::AuthContext;
use harbor_core::course::{
    CourseRecord, CourseRepository, SuggestionEntry, SuggestionRepository, parse_suggestion,
};
use harbor_core::{HarborError, Result};
use std::sync::Arc;

/// Service resolving the current user's suggested courses.
///
/// Raw `"Title by Provider"` entries are parsed and looked up in the
/// catalogue; structured entries pass straight through. Entries are
/// processed independently: a malformed entry, a catalogue miss or a
/// failed lookup drops that entry (with a log line) and never aborts the
/// batch.
pub struct CourseAdvisorService {
    auth: Arc<dyn AuthContext>,
    suggestions: Arc<dyn SuggestionRepository>,
    courses: Arc<dyn CourseRepository>,
}

impl CourseAdvisorService {
    /// Creates an advisor over the given stores and auth context.
    pub fn new(
        auth: Arc<dyn AuthContext>,
        suggestions: Arc<dyn SuggestionRepository>,
        courses: Arc<dyn CourseRepository>,
    ) -> Self {
        Self {
            auth,
            suggestions,
            courses,
        }
    }

    /// Resolves the current user's suggestions into course records.
    ///
    /// # Errors
    ///
    /// - `NotAuthorized` when no user is signed in (no fetch is issued)
    /// - `Backend` when the suggestion read itself fails
    pub async fn suggested_courses(&self) -> Result<Vec<CourseRecord>> {
        let user_id = self.auth.current_user().ok_or(HarborError::NotAuthorized)?;

        let entries = self
            .suggestions
            .list_for_employee(&user_id)
            .await
            .map_err(|e| HarborError::backend(e.to_string()))?;

        let mut records = Vec::new();
        for entry in entries {
            match entry {
                SuggestionEntry::Linked(record) => records.push(record),
                SuggestionEntry::Raw(raw) => {
                    if let Some(record) = self.resolve_raw(&raw).await {
                        records.push(record);
                    }
                }
            }
        }

        tracing::debug!(
            "[CourseAdvisor] Resolved {} suggested courses for {}",
            records.len(),
            user_id
        );

        Ok(records)
    }

    /// Parses one raw entry and looks it up in the catalogue.
    ///
    /// Returns `None` for malformed entries, catalogue misses and failed
    /// lookups; each case is logged and the rest of the batch continues.
    async fn resolve_raw(&self, raw: &str) -> Option<CourseRecord> {
        let query = match parse_suggestion(raw) {
            Ok(query) => query,
            Err(err) => {
                tracing::warn!("[CourseAdvisor] Skipping suggestion entry: {}", err);
                return None;
            }
        };

        match self.courses.find(&query).await {
            Ok(Some(record)) => Some(record),
            Ok(None) => {
                tracing::debug!(
                    "[CourseAdvisor] No catalogue match for '{}' by '{}'",
                    query.title,
                    query.provider
                );
                None
            }
            Err(err) => {
                tracing::warn!(
                    "[CourseAdvisor] Lookup failed for '{}' by '{}': {}",
                    query.title,
                    query.provider,
                    err
                );
                None
            }
        }
    }
}
