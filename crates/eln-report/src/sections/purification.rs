//! Purification section.

use serde::{Deserialize, Serialize};

/// Purification steps joined into one text block, input order preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurificationSection {
    pub text: String,
}

impl PurificationSection {
    pub fn build(steps: &[String]) -> Self {
        Self {
            text: steps.join(", "),
        }
    }
}
