//! eln-report command-line front end.
//!
//! The binary lives in `main.rs`; this library exposes its building blocks
//! (exit codes, logging setup, input parsing, output rendering) for tests.

pub mod error;
pub mod exit_codes;
pub mod input;
pub mod logging;
pub mod output;

pub use error::{CliError, Result};
pub use exit_codes::ExitCode;
