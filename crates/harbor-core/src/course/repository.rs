//! Course catalogue and suggestion store traits.
//!
//! Defines the interfaces for looking up course records and for reading a
//! user's suggested courses, decoupling the core from the hosted backend.

use super::model::{CourseQuery, CourseRecord};
use anyhow::Result;
use async_trait::async_trait;

/// A suggestion as the store returns it.
///
/// The suggestion store has been observed in two shapes: the recommendation
/// batch job writes raw `"<title> by <provider>"` strings, while the newer
/// relational table joins directly to full course rows. The canonical shape
/// is the structured [`CourseRecord`]; raw entries are adapted to it by
/// parsing and catalogue lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionEntry {
    /// A raw `"Title by Provider"` string still to be parsed and resolved.
    Raw(String),
    /// A fully structured course row from the relational shape.
    Linked(CourseRecord),
}

/// An abstract read-only course catalogue.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Finds a course by exact, case-sensitive (title, provider) match.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(CourseRecord))`: Course found
    /// - `Ok(None)`: No course matches the query
    /// - `Err(_)`: Error occurred during retrieval
    async fn find(&self, query: &CourseQuery) -> Result<Option<CourseRecord>>;
}

/// An abstract store of per-user course suggestions.
#[async_trait]
pub trait SuggestionRepository: Send + Sync {
    /// Lists the suggestions recorded for an employee, in either shape.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<SuggestionEntry>)`: The stored suggestions (possibly empty)
    /// - `Err(_)`: Error occurred during retrieval
    async fn list_for_employee(&self, employee_id: &str) -> Result<Vec<SuggestionEntry>>;
}
