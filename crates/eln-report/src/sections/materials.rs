//! Materials section: one table per material role.

use crate::quantity::{self, AMOUNT_MMOL, MASS_MG, VOLUME_ML};
use eln_common::{MaterialRole, Reaction, Sample};
use serde::{Deserialize, Serialize};

/// Column labels of every materials table.
pub const MATERIAL_COLUMNS: [&str; 5] = [
    "Formula",
    "Mass(mg)",
    "Vol(ml)",
    "Amount(mmol)",
    "Equiv/Yield",
];

/// Heading line above a sample's data row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialHeader {
    /// IUPAC name of the molecule.
    pub molecule_name: String,
    /// Sample short label.
    pub short_label: String,
}

impl MaterialHeader {
    /// Display text, e.g. `benzene (JD-12-A)`.
    pub fn text(&self) -> String {
        format!("{} ({})", self.molecule_name, self.short_label)
    }
}

/// One sample in a materials table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialRow {
    pub header: MaterialHeader,
    pub formula: String,
    pub mass_mg: String,
    pub volume_ml: String,
    pub amount_mmol: String,
    /// Equivalent for starting materials and reactants, yield for products.
    pub equivalent_or_yield: String,
}

impl MaterialRow {
    /// Build the row for a sample in the given role.
    pub fn from_sample(sample: &Sample, role: MaterialRole) -> Self {
        Self {
            header: MaterialHeader {
                molecule_name: sample.molecule.iupac_name.clone().unwrap_or_default(),
                short_label: sample.short_label.clone().unwrap_or_default(),
            },
            formula: sample.molecule.sum_formular.clone().unwrap_or_default(),
            mass_mg: MASS_MG.apply(sample.amount_g),
            volume_ml: VOLUME_ML.apply(sample.amount_l),
            amount_mmol: AMOUNT_MMOL.apply(sample.amount_mol),
            equivalent_or_yield: quantity::equivalent_or_yield(sample, role.is_product()),
        }
    }

    /// Data cells in column order.
    pub fn cells(&self) -> [&str; 5] {
        [
            &self.formula,
            &self.mass_mg,
            &self.volume_ml,
            &self.amount_mmol,
            &self.equivalent_or_yield,
        ]
    }
}

/// Table for one material role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialGroup {
    pub role: MaterialRole,
    /// Group heading.
    pub label: String,
    /// Style marker for the heading.
    pub style: String,
    pub rows: Vec<MaterialRow>,
}

impl MaterialGroup {
    /// Build the table for one role, keeping input order.
    pub fn build(role: MaterialRole, samples: &[Sample]) -> Self {
        Self {
            role,
            label: role.label().to_string(),
            style: role.style().to_string(),
            rows: samples
                .iter()
                .map(|sample| MaterialRow::from_sample(sample, role))
                .collect(),
        }
    }
}

/// Materials section content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialsSection {
    /// Column labels shared by all groups.
    pub columns: Vec<String>,
    /// Starting materials, reactants and products, always all three.
    pub groups: Vec<MaterialGroup>,
}

impl MaterialsSection {
    /// Assemble the materials tables of a reaction.
    pub fn build(reaction: &Reaction) -> Self {
        Self {
            columns: MATERIAL_COLUMNS.iter().map(|c| c.to_string()).collect(),
            groups: MaterialRole::ALL
                .iter()
                .map(|&role| MaterialGroup::build(role, reaction.materials(role)))
                .collect(),
        }
    }

    /// Table for a role.
    pub fn group(&self, role: MaterialRole) -> Option<&MaterialGroup> {
        self.groups.iter().find(|g| g.role == role)
    }

    /// Total number of sample rows.
    pub fn row_count(&self) -> usize {
        self.groups.iter().map(|g| g.rows.len()).sum()
    }
}
