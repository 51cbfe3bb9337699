//! Literature section.

use eln_common::Literature;
use serde::{Deserialize, Serialize};

/// One literature reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteratureRow {
    pub title: String,
    pub url: String,
}

/// Literature table, input order preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteratureSection {
    pub rows: Vec<LiteratureRow>,
}

impl LiteratureSection {
    pub fn build(literatures: &[Literature]) -> Self {
        Self {
            rows: literatures
                .iter()
                .map(|l| LiteratureRow {
                    title: l.title.clone().unwrap_or_default(),
                    url: l.url.clone().unwrap_or_default(),
                })
                .collect(),
        }
    }
}
