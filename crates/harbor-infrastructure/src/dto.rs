//! Wire DTOs for the hosted backend.
//!
//! Rows arrive with the backend's column names (including the quoted,
//! space-containing course columns) and are converted into domain types
//! through explicit parse steps: a conversion yields either a valid record
//! or a typed missing-field error, never a partially-defaulted struct.

use harbor_core::course::{CourseRecord, SuggestionEntry};
use harbor_core::task::TaskRecord;
use harbor_core::{HarborError, Result};
use serde::Deserialize;

/// A task row as the ledger table stores it.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskRow {
    pub user_id: String,
    pub task_description: String,
    pub task_type: String,
    pub difficulty: String,
    pub points: u32,
    pub due_by: String,
    pub completed: bool,
}

impl From<TaskRow> for TaskRecord {
    fn from(row: TaskRow) -> Self {
        TaskRecord {
            user_id: row.user_id,
            task_description: row.task_description,
            task_type: row.task_type,
            difficulty: row.difficulty,
            points: row.points,
            due_by: row.due_by,
            completed: row.completed,
        }
    }
}

/// A course row as the catalogue table stores it.
///
/// Every column is optional on the wire; the conversion decides which
/// absences are errors.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseRow {
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Provider")]
    pub provider: Option<String>,
    #[serde(rename = "Course Fee")]
    pub fee: Option<String>,
    #[serde(rename = "Upcoming Date")]
    pub date: Option<String>,
}

impl TryFrom<CourseRow> for CourseRecord {
    type Error = HarborError;

    fn try_from(row: CourseRow) -> Result<Self> {
        let title = row
            .title
            .ok_or_else(|| HarborError::malformed_entry("course row missing 'Title'"))?;
        let provider = row
            .provider
            .ok_or_else(|| HarborError::malformed_entry("course row missing 'Provider'"))?;

        Ok(CourseRecord {
            title,
            provider,
            fee: row.fee,
            date: row.date,
        })
    }
}

/// A suggestion row in either of the observed shapes.
///
/// The historic shape carries a JSON-encoded array of `"Title by
/// Provider"` strings written by the recommendation batch job; the
/// relational shape joins to a full course row. The `Raw` variant must be
/// tried first: its key is required, while a missing join on the
/// relational shape deserializes as `None`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SuggestionRow {
    Raw { suggested_courses: String },
    Linked { courses: Option<CourseRow> },
}

impl SuggestionRow {
    /// Folds this row into canonical suggestion entries.
    ///
    /// A relational row whose course join came back empty contributes
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns `MalformedEntry` for a linked row missing its course key
    /// fields, or `Serialization` when the raw JSON array cannot be parsed.
    pub fn into_entries(self) -> Result<Vec<SuggestionEntry>> {
        match self {
            SuggestionRow::Raw { suggested_courses } => {
                let raw: Vec<String> = serde_json::from_str(&suggested_courses)?;
                Ok(raw.into_iter().map(SuggestionEntry::Raw).collect())
            }
            SuggestionRow::Linked {
                courses: Some(courses),
            } => Ok(vec![SuggestionEntry::Linked(courses.try_into()?)]),
            SuggestionRow::Linked { courses: None } => Ok(Vec::new()),
        }
    }
}
