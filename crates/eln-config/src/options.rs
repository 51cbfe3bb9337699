//! Report-wide display options.

use serde::{Deserialize, Serialize};

/// How the diagram section is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagramMode {
    /// The full reaction scheme image.
    Scheme,
    /// One structure image per product.
    ProductsOnly,
}

/// URL prefixes under which diagram images are served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagePaths {
    /// Prefix for reaction scheme images.
    pub reactions: String,
    /// Prefix for molecule structure images.
    pub molecules: String,
}

impl Default for ImagePaths {
    fn default() -> Self {
        Self {
            reactions: "/images/reactions".to_string(),
            molecules: "/images/molecules".to_string(),
        }
    }
}

impl ImagePaths {
    /// Path of a reaction scheme image.
    pub fn reaction_image(&self, file: &str) -> String {
        join(&self.reactions, file)
    }

    /// Path of a molecule structure image.
    pub fn molecule_image(&self, file: &str) -> String {
        join(&self.molecules, file)
    }
}

fn join(prefix: &str, file: &str) -> String {
    format!("{}/{}", prefix.trim_end_matches('/'), file)
}

/// Report-wide structural options, distinct from per-section toggles.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Show the full reaction scheme instead of product structures only.
    #[serde(
        rename = "showAllMaterials",
        alias = "show_all_materials",
        alias = "Showallmater"
    )]
    pub show_all_materials: bool,
    /// Image URL prefixes.
    pub image_paths: ImagePaths,
}

impl ReportConfig {
    /// Create the default config (products-only diagram).
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle full-scheme diagrams.
    pub fn with_show_all_materials(mut self, enabled: bool) -> Self {
        self.show_all_materials = enabled;
        self
    }

    /// Override image URL prefixes.
    pub fn with_image_paths(mut self, paths: ImagePaths) -> Self {
        self.image_paths = paths;
        self
    }

    /// Diagram mode implied by the config.
    pub fn diagram_mode(&self) -> DiagramMode {
        if self.show_all_materials {
            DiagramMode::Scheme
        } else {
            DiagramMode::ProductsOnly
        }
    }

    /// Load config from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_products_only() {
        let config = ReportConfig::default();
        assert!(!config.show_all_materials);
        assert_eq!(config.diagram_mode(), DiagramMode::ProductsOnly);
    }

    #[test]
    fn test_show_all_materials_spellings() {
        for json in [
            r#"{"showAllMaterials": true}"#,
            r#"{"show_all_materials": true}"#,
            r#"{"Showallmater": true}"#,
        ] {
            let config = ReportConfig::from_json(json).unwrap();
            assert_eq!(config.diagram_mode(), DiagramMode::Scheme, "{json}");
        }
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config = ReportConfig::from_json(r#"{"pageSize": "A4"}"#).unwrap();
        assert_eq!(config, ReportConfig::default());
    }

    #[test]
    fn test_image_paths_join() {
        let paths = ImagePaths::default();
        assert_eq!(
            paths.reaction_image("abc.svg"),
            "/images/reactions/abc.svg"
        );
        assert_eq!(
            paths.molecule_image("mol.svg"),
            "/images/molecules/mol.svg"
        );

        let custom = ImagePaths {
            reactions: "https://eln.example.org/svg/".to_string(),
            molecules: "/m".to_string(),
        };
        assert_eq!(
            custom.reaction_image("r.svg"),
            "https://eln.example.org/svg/r.svg"
        );
        assert_eq!(custom.molecule_image("x.svg"), "/m/x.svg");
    }

    #[test]
    fn test_serializes_camel_case_flag() {
        let json = serde_json::to_string(&ReportConfig::new().with_show_all_materials(true)).unwrap();
        assert!(json.contains("\"showAllMaterials\":true"));
    }
}
