//! Error types for the Harbor Hub portal core.

use serde::Serialize;
use thiserror::Error;

/// A shared error type for the entire portal core.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone, Serialize)]
pub enum HarborError {
    /// No authenticated user; fetch operations short-circuit with this
    /// instead of issuing a request that would fail server-side.
    #[error("Not authorized: no current user")]
    NotAuthorized,

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Hosted data backend error (ledger, course and suggestion reads)
    #[error("Backend error: {0}")]
    Backend(String),

    /// Completion endpoint error (transport, HTTP status, empty choices)
    #[error("Completion error: {0}")]
    Completion(String),

    /// A persisted entry that cannot be parsed; skipped per item
    #[error("Malformed entry: {0}")]
    MalformedEntry(String),

    /// IO error (configuration file access)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error; fatal at initialization
    #[error("Configuration error: {0}")]
    Config(String),

    /// A message with no content was submitted to a chat session
    #[error("Message text is empty")]
    EmptyMessage,

    /// A chat session already has an outstanding completion request
    #[error("A request is already in flight for this session")]
    RequestInFlight,

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HarborError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a Backend error
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }

    /// Creates a Completion error
    pub fn completion(message: impl Into<String>) -> Self {
        Self::Completion(message.into())
    }

    /// Creates a MalformedEntry error
    pub fn malformed_entry(message: impl Into<String>) -> Self {
        Self::MalformedEntry(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotAuthorized error
    pub fn is_not_authorized(&self) -> bool {
        matches!(self, Self::NotAuthorized)
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a Backend error
    pub fn is_backend(&self) -> bool {
        matches!(self, Self::Backend(_))
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this error is recoverable by the session that observed it.
    ///
    /// Returns true for transient external-call failures and per-item data
    /// problems; false for authorization absence and configuration errors,
    /// which cannot be corrected by retry.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Backend(_) | Self::Completion(_) | Self::MalformedEntry(_)
        )
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for HarborError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for HarborError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for HarborError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from anyhow::Error at repository boundaries
impl From<anyhow::Error> for HarborError {
    fn from(err: anyhow::Error) -> Self {
        Self::Backend(err.to_string())
    }
}

/// A type alias for `Result<T, HarborError>`.
pub type Result<T> = std::result::Result<T, HarborError>;
