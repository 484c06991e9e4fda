//! Course domain models.

use serde::{Deserialize, Serialize};

/// A lookup key for a course, parsed from a raw suggestion entry.
///
/// Matching against the course catalogue is exact and case-sensitive on
/// both fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseQuery {
    /// Course title.
    pub title: String,
    /// Course provider.
    pub provider: String,
}

/// A full course record from the catalogue.
///
/// `fee` and `date` are optional because the catalogue leaves them blank
/// for some courses; presentation decides how to render their absence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Course title.
    pub title: String,
    /// Course provider.
    pub provider: String,
    /// Course fee, when the catalogue lists one.
    pub fee: Option<String>,
    /// Upcoming run date, when the catalogue lists one.
    pub date: Option<String>,
}

impl CourseRecord {
    /// The lookup key for this record.
    pub fn query(&self) -> CourseQuery {
        CourseQuery {
            title: self.title.clone(),
            provider: self.provider.clone(),
        }
    }
}
