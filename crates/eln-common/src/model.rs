//! Reaction record and its material, analytical and narrative parts.
//!
//! These types mirror the JSON documents served by the notebook API. Every
//! field is optional on input: missing or `null` lists become empty lists,
//! `null` entries inside reaction lists are dropped, a `null` molecule is an
//! empty molecule, and missing scalars become `None`, so a sparsely filled
//! reaction still deserializes.

use crate::id::ReactionId;
use crate::rich_text::RichText;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Outcome recorded for a reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReactionStatus {
    /// Not yet carried out.
    Planned,
    /// Carried out and worked.
    Successful,
    /// Carried out and failed.
    #[serde(rename = "Not Successful")]
    NotSuccessful,
}

impl ReactionStatus {
    /// Interpret a stored status string. Unrecognized values yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Planned" => Some(ReactionStatus::Planned),
            "Successful" => Some(ReactionStatus::Successful),
            "Not Successful" => Some(ReactionStatus::NotSuccessful),
            _ => None,
        }
    }

    /// Stored string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReactionStatus::Planned => "Planned",
            ReactionStatus::Successful => "Successful",
            ReactionStatus::NotSuccessful => "Not Successful",
        }
    }
}

impl fmt::Display for ReactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role a sample plays within a reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialRole {
    StartingMaterial,
    Reactant,
    Product,
}

impl MaterialRole {
    /// All roles in report order.
    pub const ALL: [MaterialRole; 3] = [
        MaterialRole::StartingMaterial,
        MaterialRole::Reactant,
        MaterialRole::Product,
    ];

    /// Group heading shown above the role's table.
    pub fn label(&self) -> &'static str {
        match self {
            MaterialRole::StartingMaterial => "Starting Materials",
            MaterialRole::Reactant => "Reactants",
            MaterialRole::Product => "Products",
        }
    }

    /// Style marker for the group heading.
    pub fn style(&self) -> &'static str {
        match self {
            MaterialRole::StartingMaterial => "success",
            MaterialRole::Reactant => "warning",
            MaterialRole::Product => "danger",
        }
    }

    /// Products report a yield instead of an equivalent.
    pub fn is_product(&self) -> bool {
        matches!(self, MaterialRole::Product)
    }
}

/// Molecule a sample is made of.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Molecule {
    /// Sum formula (the API spells it `sum_formular`).
    #[serde(alias = "sum_formula")]
    pub sum_formular: Option<String>,
    /// IUPAC name.
    pub iupac_name: Option<String>,
    /// Structure image file name.
    pub molecule_svg_file: Option<String>,
}

/// One analytical record attached to a sample.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Analysis {
    /// Analysis category (NMR, MS, ...).
    pub kind: Option<String>,
    /// Rich-text body.
    pub content: RichText,
    /// Plain-text description.
    pub description: Option<String>,
}

/// A quantity of one molecule used in a reaction.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Sample {
    pub short_label: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub molecule: Molecule,
    /// Mass in grams.
    pub amount_g: Option<f64>,
    /// Volume in litres.
    pub amount_l: Option<f64>,
    /// Molar amount in moles.
    pub amount_mol: Option<f64>,
    /// Equivalent ratio (unitless). For products this is the yield fraction.
    pub equivalent: Option<f64>,
    /// Analyses; `null` entries are kept so indices match the source list.
    #[serde(deserialize_with = "null_as_default")]
    pub analyses: Vec<Option<Analysis>>,
}

impl Sample {
    /// Non-null analyses with their position in the source list.
    pub fn analyses(&self) -> impl Iterator<Item = (usize, &Analysis)> {
        self.analyses
            .iter()
            .enumerate()
            .filter_map(|(i, a)| a.as_ref().map(|a| (i, a)))
    }

    /// Whether at least one non-null analysis is attached.
    pub fn has_analyses(&self) -> bool {
        self.analyses.iter().any(Option::is_some)
    }
}

/// Solvent used in a reaction.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Solvent {
    pub preferred_label: Option<String>,
    /// Volume actually used (ml).
    pub real_amount_value: Option<f64>,
    /// Volume planned (ml).
    pub target_amount_value: Option<f64>,
}

/// Literature reference.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Literature {
    pub title: Option<String>,
    pub url: Option<String>,
}

/// A chemical reaction record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Reaction {
    pub id: Option<ReactionId>,
    pub short_label: Option<String>,
    /// Raw status text; see [`Reaction::status`].
    pub status: Option<String>,
    pub description: RichText,
    #[serde(deserialize_with = "skip_nulls")]
    pub literatures: Vec<Literature>,
    /// Reaction scheme image file name.
    pub reaction_svg_file: Option<String>,
    pub tlc_description: Option<String>,
    pub tlc_solvents: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub rf_value: Option<String>,
    #[serde(deserialize_with = "skip_nulls")]
    pub purification: Vec<String>,
    pub observation: Option<String>,
    #[serde(deserialize_with = "skip_nulls")]
    pub solvents: Vec<Solvent>,
    /// Free-text solvent, used when no structured solvents are recorded.
    pub solvent: Option<String>,
    #[serde(deserialize_with = "skip_nulls")]
    pub dangerous_products: Vec<String>,
    #[serde(deserialize_with = "skip_nulls")]
    pub starting_materials: Vec<Sample>,
    #[serde(deserialize_with = "skip_nulls")]
    pub reactants: Vec<Sample>,
    #[serde(deserialize_with = "skip_nulls")]
    pub products: Vec<Sample>,
}

impl Reaction {
    /// Interpreted status, `None` when unset or unrecognized.
    pub fn status(&self) -> Option<ReactionStatus> {
        self.status.as_deref().and_then(ReactionStatus::parse)
    }

    /// Samples recorded under a material role.
    pub fn materials(&self, role: MaterialRole) -> &[Sample] {
        match role {
            MaterialRole::StartingMaterial => &self.starting_materials,
            MaterialRole::Reactant => &self.reactants,
            MaterialRole::Product => &self.products,
        }
    }

    /// Parse a reaction from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Lists where a `null` entry carries no information.
fn skip_nulls<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items = Option::<Vec<Option<T>>>::deserialize(deserializer)?;
    Ok(items.unwrap_or_default().into_iter().flatten().collect())
}

/// Rf values are free text in the editor but some exports store numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_parse() {
        assert_eq!(
            ReactionStatus::parse("Successful"),
            Some(ReactionStatus::Successful)
        );
        assert_eq!(ReactionStatus::parse("Planned"), Some(ReactionStatus::Planned));
        assert_eq!(
            ReactionStatus::parse("Not Successful"),
            Some(ReactionStatus::NotSuccessful)
        );
        assert_eq!(ReactionStatus::parse("Unknown"), None);
        assert_eq!(ReactionStatus::parse("successful"), None);
    }

    #[test]
    fn test_empty_document_deserializes() {
        let reaction = Reaction::from_json("{}").unwrap();
        assert!(reaction.products.is_empty());
        assert!(reaction.status().is_none());
        assert!(!reaction.description.is_present());
    }

    #[test]
    fn test_null_lists_become_empty() {
        let reaction: Reaction = serde_json::from_value(json!({
            "purification": null,
            "products": null,
            "literatures": null,
            "solvents": null
        }))
        .unwrap();
        assert!(reaction.purification.is_empty());
        assert!(reaction.products.is_empty());
        assert!(reaction.literatures.is_empty());
        assert!(reaction.solvents.is_empty());
    }

    #[test]
    fn test_null_list_entries_are_dropped() {
        let reaction: Reaction = serde_json::from_value(json!({
            "literatures": [null, {"title": "Org. Lett."}],
            "purification": [null, "Column"],
            "solvents": [null],
            "dangerous_products": [null],
            "starting_materials": [null, {"short_label": "A"}],
            "reactants": [null],
            "products": [null]
        }))
        .unwrap();
        assert_eq!(reaction.literatures.len(), 1);
        assert_eq!(reaction.purification, vec!["Column"]);
        assert!(reaction.solvents.is_empty());
        assert!(reaction.dangerous_products.is_empty());
        assert_eq!(reaction.starting_materials[0].short_label.as_deref(), Some("A"));
        assert!(reaction.reactants.is_empty());
        assert!(reaction.products.is_empty());
    }

    #[test]
    fn test_null_molecule_is_empty() {
        let sample: Sample = serde_json::from_value(json!({"molecule": null})).unwrap();
        assert_eq!(sample.molecule, Molecule::default());
    }

    #[test]
    fn test_rf_value_accepts_number_and_string() {
        let numeric: Reaction = serde_json::from_value(json!({"rf_value": 0.45})).unwrap();
        assert_eq!(numeric.rf_value.as_deref(), Some("0.45"));

        let text: Reaction = serde_json::from_value(json!({"rf_value": "0.3 (UV)"})).unwrap();
        assert_eq!(text.rf_value.as_deref(), Some("0.3 (UV)"));

        let missing: Reaction = serde_json::from_value(json!({"rf_value": null})).unwrap();
        assert!(missing.rf_value.is_none());
    }

    #[test]
    fn test_sample_analyses_skip_nulls() {
        let sample: Sample = serde_json::from_value(json!({
            "analyses": [null, {"kind": "NMR"}, null, {"kind": "MS"}]
        }))
        .unwrap();
        let kept: Vec<(usize, Option<&str>)> = sample
            .analyses()
            .map(|(i, a)| (i, a.kind.as_deref()))
            .collect();
        assert_eq!(kept, vec![(1, Some("NMR")), (3, Some("MS"))]);
        assert!(sample.has_analyses());
    }

    #[test]
    fn test_sum_formula_alias() {
        let molecule: Molecule = serde_json::from_value(json!({"sum_formula": "C6H6"})).unwrap();
        assert_eq!(molecule.sum_formular.as_deref(), Some("C6H6"));
    }

    #[test]
    fn test_materials_by_role() {
        let reaction = Reaction {
            reactants: vec![Sample::default(), Sample::default()],
            products: vec![Sample::default()],
            ..Default::default()
        };
        assert_eq!(reaction.materials(MaterialRole::StartingMaterial).len(), 0);
        assert_eq!(reaction.materials(MaterialRole::Reactant).len(), 2);
        assert_eq!(reaction.materials(MaterialRole::Product).len(), 1);
        assert!(MaterialRole::Product.is_product());
        assert!(!MaterialRole::Reactant.is_product());
    }
}
