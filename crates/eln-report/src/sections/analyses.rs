//! Analyses section: analytical records of the products.

use eln_common::{RichText, Sample};
use serde::{Deserialize, Serialize};

/// Position of an analysis: product index and analysis index.
///
/// Indices refer to the source lists, so skipped null entries leave gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnalysisKey {
    pub sample_index: usize,
    pub analysis_index: usize,
}

/// One labeled analysis block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisEntry {
    pub key: AnalysisKey,
    /// Sum formula of the analysed product.
    pub sum_formula: String,
    pub kind: String,
    pub content: RichText,
    pub description: String,
}

impl AnalysisEntry {
    /// Block heading, e.g. `C6H6 (NMR)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.sum_formula, self.kind)
    }
}

/// Analyses section content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysesSection {
    pub entries: Vec<AnalysisEntry>,
}

impl AnalysesSection {
    /// Collect analyses of all products in product order, then list order.
    pub fn build(products: &[Sample]) -> Self {
        let entries = products
            .iter()
            .enumerate()
            .flat_map(|(sample_index, sample)| {
                let sum_formula = sample.molecule.sum_formular.clone().unwrap_or_default();
                sample
                    .analyses()
                    .map(move |(analysis_index, analysis)| AnalysisEntry {
                        key: AnalysisKey {
                            sample_index,
                            analysis_index,
                        },
                        sum_formula: sum_formula.clone(),
                        kind: analysis.kind.clone().unwrap_or_default(),
                        content: analysis.content.clone(),
                        description: analysis.description.clone().unwrap_or_default(),
                    })
            })
            .collect();
        Self { entries }
    }

    /// Entry by key.
    pub fn entry(&self, key: AnalysisKey) -> Option<&AnalysisEntry> {
        self.entries.iter().find(|e| e.key == key)
    }
}
