//! Suggestion string parsing.
//!
//! The recommendation batch job stores suggested courses as
//! `"<title> by <provider>"` strings. This module turns those raw entries
//! back into lookup keys, skipping malformed entries without aborting the
//! batch.

use super::model::CourseQuery;
use crate::error::{HarborError, Result};

/// The literal delimiter separating title from provider in raw entries.
const SUGGESTION_DELIMITER: &str = " by ";

/// Parses a single `"Title by Provider"` entry into a lookup key.
///
/// Surrounding whitespace on both sides of the delimiter is trimmed. The
/// split is on the first occurrence of the delimiter, so a provider name
/// containing `" by "` would be truncated; the batch job never emits one.
///
/// # Errors
///
/// Returns `HarborError::MalformedEntry` when the delimiter is missing or
/// either side is empty after trimming.
pub fn parse_suggestion(raw: &str) -> Result<CourseQuery> {
    let (title, provider) = raw
        .split_once(SUGGESTION_DELIMITER)
        .ok_or_else(|| HarborError::malformed_entry(format!("no ' by ' delimiter in '{raw}'")))?;

    let title = title.trim();
    let provider = provider.trim();

    if title.is_empty() || provider.is_empty() {
        return Err(HarborError::malformed_entry(format!(
            "empty title or provider in '{raw}'"
        )));
    }

    Ok(CourseQuery {
        title: title.to_string(),
        provider: provider.to_string(),
    })
}

/// Parses a batch of raw suggestion entries.
///
/// Malformed entries are logged and skipped; one bad entry never aborts
/// the rest of the batch.
pub fn parse_suggestions(raw_entries: &[String]) -> Vec<CourseQuery> {
    raw_entries
        .iter()
        .filter_map(|raw| match parse_suggestion(raw) {
            Ok(query) => Some(query),
            Err(err) => {
                tracing::warn!("[CourseMatch] Skipping suggestion entry: {}", err);
                None
            }
        })
        .collect()
}
