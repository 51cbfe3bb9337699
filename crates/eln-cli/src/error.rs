//! CLI error type and its exit-code mapping.

use crate::exit_codes::ExitCode;
use eln_config::ValidationError;
use eln_report::ReportError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Error, Debug)]
pub enum CliError {
    /// Report profile could not be loaded or validated.
    #[error("profile error: {0}")]
    Profile(#[from] ValidationError),

    /// Reaction input could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reaction input was absent or malformed.
    #[error("invalid reaction input: {0}")]
    Input(#[from] ReportError),

    /// Output could not be serialized.
    #[error("failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Profile(_) => ExitCode::ConfigError,
            CliError::Read { .. } | CliError::Input(_) => ExitCode::InputError,
            CliError::Output(_) => ExitCode::InternalError,
        }
    }

    /// Detail code for structured error output.
    pub fn code(&self) -> u32 {
        match self {
            CliError::Profile(err) => err.code(),
            other => other.exit_code().as_i32().unsigned_abs(),
        }
    }
}
