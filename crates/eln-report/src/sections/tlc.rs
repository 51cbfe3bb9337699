//! TLC control section.

use eln_common::Reaction;
use serde::{Deserialize, Serialize};

/// TLC block: rf value, solvents and description, in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlcSection {
    pub rf_value: String,
    pub solvents: String,
    pub description: String,
}

impl TlcSection {
    pub fn build(reaction: &Reaction) -> Self {
        Self {
            rf_value: reaction.rf_value.clone().unwrap_or_default(),
            solvents: reaction.tlc_solvents.clone().unwrap_or_default(),
            description: reaction.tlc_description.clone().unwrap_or_default(),
        }
    }

    /// Display lines in field order.
    pub fn lines(&self) -> [String; 3] {
        [
            format!("rf_value: {}", self.rf_value),
            format!("TLC_solvents: {}", self.solvents),
            self.description.clone(),
        ]
    }
}
