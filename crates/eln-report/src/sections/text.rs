//! Narrative sections: description and observation.

use eln_common::RichText;
use serde::{Deserialize, Serialize};

/// Description section; rich text is passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptionSection {
    pub content: RichText,
}

impl DescriptionSection {
    pub fn build(description: &RichText) -> Self {
        Self {
            content: description.clone(),
        }
    }

    /// Text without formatting.
    pub fn plain_text(&self) -> String {
        self.content.plain_text()
    }
}

/// Observation section; plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationSection {
    pub text: String,
}

impl ObservationSection {
    pub fn build(observation: Option<&str>) -> Self {
        Self {
            text: observation.unwrap_or_default().to_string(),
        }
    }
}
