//! Per-section report settings.

use crate::validate::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Recognized setting keys, in report order.
pub const SETTING_KEYS: [&str; 8] = [
    "diagram",
    "material",
    "description",
    "purification",
    "tlc",
    "observation",
    "analysis",
    "literature",
];

/// User toggles selecting which optional sections to consider.
///
/// A toggle only expresses intent: most sections additionally require data
/// to be present before they appear. Missing keys default to `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Reaction scheme or product structures.
    pub diagram: bool,
    /// Materials table and solvents.
    pub material: bool,
    pub description: bool,
    pub purification: bool,
    pub tlc: bool,
    pub observation: bool,
    /// Product analyses.
    pub analysis: bool,
    pub literature: bool,
}

impl ReportSettings {
    /// All sections off.
    pub fn new() -> Self {
        Self::default()
    }

    /// All sections on.
    pub fn all() -> Self {
        Self {
            diagram: true,
            material: true,
            description: true,
            purification: true,
            tlc: true,
            observation: true,
            analysis: true,
            literature: true,
        }
    }

    /// Look up a toggle by key. Unknown keys yield `None`.
    pub fn get(&self, key: &str) -> Option<bool> {
        let value = match key {
            "diagram" => self.diagram,
            "material" => self.material,
            "description" => self.description,
            "purification" => self.purification,
            "tlc" => self.tlc,
            "observation" => self.observation,
            "analysis" => self.analysis,
            "literature" => self.literature,
            _ => return None,
        };
        Some(value)
    }

    /// Set a toggle by key. Returns `false` if the key is not recognized.
    pub fn set(&mut self, key: &str, enabled: bool) -> bool {
        let slot = match key {
            "diagram" => &mut self.diagram,
            "material" => &mut self.material,
            "description" => &mut self.description,
            "purification" => &mut self.purification,
            "tlc" => &mut self.tlc,
            "observation" => &mut self.observation,
            "analysis" => &mut self.analysis,
            "literature" => &mut self.literature,
            _ => return false,
        };
        *slot = enabled;
        true
    }

    /// Builder form of [`ReportSettings::set`]; unknown keys are ignored.
    pub fn with(mut self, key: &str, enabled: bool) -> Self {
        self.set(key, enabled);
        self
    }

    /// Keys of all enabled toggles, in report order.
    pub fn enabled_keys(&self) -> Vec<&'static str> {
        SETTING_KEYS
            .iter()
            .copied()
            .filter(|key| self.get(key) == Some(true))
            .collect()
    }

    /// Build settings from a JSON object.
    ///
    /// `null` yields the defaults. Unknown keys are ignored; a recognized key
    /// holding anything but a boolean is rejected.
    pub fn from_value(value: &Value) -> ValidationResult<Self> {
        let map = match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(map) => map,
            other => {
                return Err(ValidationError::InvalidValue {
                    field: "settings".to_string(),
                    message: format!("Must be an object, got {}", other),
                })
            }
        };

        let mut settings = Self::default();
        for (key, raw) in map {
            if !SETTING_KEYS.contains(&key.as_str()) {
                debug!(key = %key, "ignoring unknown report setting");
                continue;
            }
            let enabled = raw.as_bool().ok_or_else(|| ValidationError::InvalidValue {
                field: format!("settings.{}", key),
                message: format!("Must be a boolean, got {}", raw),
            })?;
            settings.set(key, enabled);
        }
        Ok(settings)
    }

    /// Parse settings from JSON text.
    pub fn from_json(json: &str) -> ValidationResult<Self> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| ValidationError::ParseError(e.to_string()))?;
        Self::from_value(&value)
    }
}
