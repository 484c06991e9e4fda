//! Points ledger reader.
//!
//! Reduces a user's task-completion records into the single accumulated
//! point total the reward progression engine consumes.

use crate::auth::AuthContext;
use crate::error::{HarborError, Result};
use crate::task::TaskRepository;
use std::sync::Arc;

/// Reads the task ledger and derives the current user's point total.
///
/// The total is always the sum of `points` over the user's completed task
/// records, freshly loaded on every call; it is never cached. A missing
/// user identity yields [`HarborError::NotAuthorized`] so callers can
/// distinguish "no user" from "user with zero points", and backend failures
/// are surfaced rather than silently treated as zero.
pub struct PointsLedger {
    tasks: Arc<dyn TaskRepository>,
    auth: Arc<dyn AuthContext>,
}

impl PointsLedger {
    /// Creates a ledger reader over the given task store and auth context.
    pub fn new(tasks: Arc<dyn TaskRepository>, auth: Arc<dyn AuthContext>) -> Self {
        Self { tasks, auth }
    }

    /// Loads the current user's accumulated point total.
    ///
    /// # Errors
    ///
    /// - `NotAuthorized` when no user is signed in (no fetch is issued)
    /// - `Backend` when the ledger read fails
    pub async fn load_points(&self) -> Result<u32> {
        let user_id = self.auth.current_user().ok_or(HarborError::NotAuthorized)?;

        let records = self
            .tasks
            .list_by_user(&user_id)
            .await
            .map_err(|e| HarborError::backend(e.to_string()))?;

        let total = records.iter().map(|record| record.earned_points()).sum();

        tracing::debug!(
            "[PointsLedger] {} records for user {}, total {} points",
            records.len(),
            user_id,
            total
        );

        Ok(total)
    }
}
