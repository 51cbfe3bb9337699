//! Report profiles: settings plus display config in one file.
//!
//! ```json
//! {
//!   "schema_version": "1.0.0",
//!   "settings": { "diagram": true, "material": true },
//!   "config": { "showAllMaterials": false }
//! }
//! ```

use crate::options::ReportConfig;
use crate::resolve::{resolve_profile, ProfileLocation};
use crate::settings::ReportSettings;
use crate::validate::{validate_profile, ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

/// Settings and display config for composing reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportProfile {
    /// Schema version.
    pub schema_version: String,
    /// Section toggles.
    pub settings: ReportSettings,
    /// Display config.
    pub config: ReportConfig,
}

impl Default for ReportProfile {
    fn default() -> Self {
        Self {
            schema_version: crate::CONFIG_SCHEMA_VERSION.to_string(),
            settings: ReportSettings::default(),
            config: ReportConfig::default(),
        }
    }
}

impl ReportProfile {
    /// Parse a profile from JSON.
    ///
    /// `schema_version` defaults to the current version when omitted;
    /// `settings` and `config` default when omitted.
    pub fn from_json(json: &str) -> ValidationResult<Self> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| ValidationError::ParseError(e.to_string()))?;
        Self::from_value(&value)
    }

    /// Build a profile from a parsed JSON document.
    pub fn from_value(value: &Value) -> ValidationResult<Self> {
        let map = value.as_object().ok_or_else(|| {
            ValidationError::ParseError("profile must be a JSON object".to_string())
        })?;

        let schema_version = match map.get("schema_version") {
            None | Some(Value::Null) => crate::CONFIG_SCHEMA_VERSION.to_string(),
            Some(Value::String(v)) => v.clone(),
            Some(other) => {
                return Err(ValidationError::InvalidValue {
                    field: "schema_version".to_string(),
                    message: format!("Must be a string, got {}", other),
                })
            }
        };

        let settings = ReportSettings::from_value(map.get("settings").unwrap_or(&Value::Null))?;

        let config = match map.get("config") {
            None | Some(Value::Null) => ReportConfig::default(),
            Some(raw) => serde_json::from_value(raw.clone()).map_err(|e| {
                ValidationError::InvalidValue {
                    field: "config".to_string(),
                    message: e.to_string(),
                }
            })?,
        };

        Ok(Self {
            schema_version,
            settings,
            config,
        })
    }

    /// Read and validate a profile file.
    pub fn load(path: &Path) -> ValidationResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ValidationError::IoError(format!("{}: {}", path.display(), e)))?;
        let profile = Self::from_json(&content)?;
        validate_profile(&profile)?;
        Ok(profile)
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// A profile together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedProfile {
    pub profile: ReportProfile,
    pub location: ProfileLocation,
}

/// Resolve, read and validate the active report profile.
///
/// Falls back to [`ReportProfile::default`] when no file is found.
pub fn load_profile(cli_path: Option<&Path>) -> ValidationResult<LoadedProfile> {
    let location = resolve_profile(cli_path);
    let profile = match &location.path {
        Some(path) => {
            debug!(path = %path.display(), source = %location.source, "loading report profile");
            ReportProfile::load(path)?
        }
        None => ReportProfile::default(),
    };

    info!(
        source = %location.source,
        sections = ?profile.settings.enabled_keys(),
        show_all_materials = profile.config.show_all_materials,
        "Report profile loaded"
    );

    Ok(LoadedProfile { profile, location })
}
