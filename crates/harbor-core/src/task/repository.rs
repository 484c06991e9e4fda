//! Task repository trait.
//!
//! Defines the interface for reading task-completion records.

use super::model::TaskRecord;
use anyhow::Result;
use async_trait::async_trait;

/// An abstract repository for reading the task ledger.
///
/// This trait defines the contract for retrieving a user's task records,
/// decoupling the core logic from the specific storage mechanism (hosted
/// REST backend, database, in-memory fixture).
///
/// There is no write path: the core consumes the ledger, it never mutates
/// it.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Lists all task records belonging to a user.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user whose records to fetch
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<TaskRecord>)`: The user's records (possibly empty)
    /// - `Err(_)`: Error occurred during retrieval
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<TaskRecord>>;
}
