//! Configuration validation errors and semantic validation.

use crate::profile::ReportProfile;
use thiserror::Error;

/// Validation result type.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Configuration validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Version mismatch: expected {expected}, got {actual}")]
    VersionMismatch { expected: String, actual: String },
}

impl ValidationError {
    /// Error code for structured error reporting.
    pub fn code(&self) -> u32 {
        match self {
            ValidationError::IoError(_) => 60,
            ValidationError::ParseError(_) => 61,
            ValidationError::InvalidValue { .. } => 65,
            ValidationError::VersionMismatch { .. } => 66,
        }
    }
}

/// Validate a report profile semantically.
pub fn validate_profile(profile: &ReportProfile) -> ValidationResult<()> {
    if profile.schema_version != crate::CONFIG_SCHEMA_VERSION {
        return Err(ValidationError::VersionMismatch {
            expected: crate::CONFIG_SCHEMA_VERSION.to_string(),
            actual: profile.schema_version.clone(),
        });
    }

    let paths = &profile.config.image_paths;
    validate_prefix("config.image_paths.reactions", &paths.reactions)?;
    validate_prefix("config.image_paths.molecules", &paths.molecules)?;

    Ok(())
}

/// Image prefixes must be non-empty and contain no whitespace.
fn validate_prefix(field: &str, prefix: &str) -> ValidationResult<()> {
    if prefix.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            message: "Must not be empty".to_string(),
        });
    }

    if prefix.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            message: format!("Must not contain whitespace, got {:?}", prefix),
        });
    }

    Ok(())
}
