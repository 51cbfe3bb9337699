//! Reading reaction documents from files or stdin.

use crate::error::{CliError, Result};
use eln_common::Reaction;
use eln_report::ReportError;
use serde_json::Value;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Input argument meaning "read from stdin".
pub const STDIN_MARKER: &str = "-";

/// Read the raw input document.
pub fn read_input(input: &str) -> Result<String> {
    if input == STDIN_MARKER {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| CliError::Read {
                path: PathBuf::from("<stdin>"),
                source,
            })?;
        return Ok(buf);
    }

    let path = Path::new(input);
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a document holding one reaction object or an array of them.
///
/// A `null` document, or a `null` array element, is a missing reaction.
pub fn parse_reactions(json: &str) -> std::result::Result<Vec<Reaction>, ReportError> {
    let value: Value = serde_json::from_str(json)?;
    let reactions = match value {
        Value::Array(items) => items
            .into_iter()
            .map(reaction_from_value)
            .collect::<std::result::Result<Vec<_>, _>>()?,
        other => vec![reaction_from_value(other)?],
    };
    debug!(count = reactions.len(), "parsed reaction input");
    Ok(reactions)
}

fn reaction_from_value(value: Value) -> std::result::Result<Reaction, ReportError> {
    if value.is_null() {
        return Err(ReportError::MissingReaction);
    }
    Ok(serde_json::from_value(value)?)
}
