//! Task record domain model.
//!
//! This module contains the task-completion record as the hosted ledger
//! stores it. Records are read-only from the core's perspective; the point
//! total a user has earned is derived from them, never written back.

use serde::{Deserialize, Serialize};

/// A task assigned to a user in the onboarding ledger.
///
/// Tasks are generated elsewhere (single or paired, work or fun, with
/// difficulty-scaled points) and marked completed by the tasks view. The
/// core only reads them to derive the accumulated point total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Identifier of the user the task belongs to.
    pub user_id: String,
    /// Short description of the task (kept to a few words upstream).
    pub task_description: String,
    /// Task category ("single_fun", "pair_work", ...).
    pub task_type: String,
    /// Difficulty level ("easy", "medium", "hard").
    pub difficulty: String,
    /// Points awarded when the task is completed.
    pub points: u32,
    /// Due date (YYYY-MM-DD).
    pub due_by: String,
    /// Whether the task has been completed.
    pub completed: bool,
}

impl TaskRecord {
    /// Points this record contributes to the user's total.
    ///
    /// Incomplete tasks contribute zero.
    pub fn earned_points(&self) -> u32 {
        if self.completed { self.points } else { 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(completed: bool, points: u32) -> TaskRecord {
        TaskRecord {
            user_id: "emp-1".to_string(),
            task_description: "Tour the container yard".to_string(),
            task_type: "single_work".to_string(),
            difficulty: "easy".to_string(),
            points,
            due_by: "2026-01-15".to_string(),
            completed,
        }
    }

    #[test]
    fn test_earned_points() {
        assert_eq!(record(true, 5).earned_points(), 5);
        assert_eq!(record(false, 5).earned_points(), 0);
    }
}
