//! Error types for report composition.

use thiserror::Error;

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur during report composition.
///
/// Degraded input (missing amounts, empty lists, null analyses, unknown
/// status) is never an error; it resolves to placeholders or omissions.
#[derive(Error, Debug)]
pub enum ReportError {
    /// No reaction record was supplied.
    #[error("missing required data: reaction record is absent")]
    MissingReaction,

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
