//! Solvent section.

use crate::quantity::solvent_volume_label;
use eln_common::{presence, Solvent};
use serde::{Deserialize, Serialize};

/// Solvent section content.
///
/// Structured solvents and the free-text fallback are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "form", content = "value", rename_all = "snake_case")]
pub enum SolventSection {
    /// One line per recorded solvent, e.g. `THF (5ml)`.
    Listed(Vec<String>),
    /// Free-text solvent description, verbatim.
    FreeText(String),
}

impl SolventSection {
    /// Assemble from the structured list, falling back to free text.
    pub fn build(solvents: &[Solvent], fallback: Option<&str>) -> Self {
        if presence::list(solvents) {
            SolventSection::Listed(solvents.iter().map(solvent_line).collect())
        } else {
            SolventSection::FreeText(fallback.unwrap_or_default().to_string())
        }
    }

    /// Display lines.
    pub fn lines(&self) -> Vec<&str> {
        match self {
            SolventSection::Listed(lines) => lines.iter().map(String::as_str).collect(),
            SolventSection::FreeText(text) => vec![text.as_str()],
        }
    }
}

fn solvent_line(solvent: &Solvent) -> String {
    format!(
        "{}{}",
        solvent.preferred_label.as_deref().unwrap_or_default(),
        solvent_volume_label(solvent)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solvent(label: &str, real: Option<f64>, target: Option<f64>) -> Solvent {
        Solvent {
            preferred_label: Some(label.to_string()),
            real_amount_value: real,
            target_amount_value: target,
        }
    }

    #[test]
    fn test_listed_solvents() {
        let section = SolventSection::build(
            &[
                solvent("THF", Some(5.0), None),
                solvent("water", None, Some(12.5)),
                solvent("DMF", None, None),
            ],
            Some("ignored"),
        );
        assert_eq!(
            section.lines(),
            vec!["THF (5ml)", "water (12.5ml)", "DMF (0.0ml)"]
        );
    }

    #[test]
    fn test_free_text_fallback() {
        let section = SolventSection::build(&[], Some("DCM"));
        assert_eq!(section, SolventSection::FreeText("DCM".to_string()));
        assert_eq!(section.lines(), vec!["DCM"]);
    }

    #[test]
    fn test_free_text_absent() {
        assert_eq!(
            SolventSection::build(&[], None),
            SolventSection::FreeText(String::new())
        );
    }

    #[test]
    fn test_serialized_form() {
        let value = serde_json::to_value(SolventSection::FreeText("DCM".to_string())).unwrap();
        assert_eq!(value["form"], "free_text");
        assert_eq!(value["value"], "DCM");
    }
}
