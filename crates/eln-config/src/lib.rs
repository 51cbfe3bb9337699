//! Reaction report configuration loading and validation.
//!
//! This crate provides:
//! - Per-section report settings (which optional sections to consider)
//! - Report-wide display config (diagram mode, image path prefixes)
//! - Report profiles bundling both, loaded from JSON
//! - Profile resolution (CLI → env → XDG → system → defaults)
//! - Semantic validation with stable error codes

pub mod options;
pub mod profile;
pub mod resolve;
pub mod settings;
pub mod validate;

pub use options::{DiagramMode, ImagePaths, ReportConfig};
pub use profile::{load_profile, LoadedProfile, ReportProfile};
pub use resolve::{resolve_profile, ConfigSource, ProfileLocation};
pub use settings::ReportSettings;
pub use validate::{ValidationError, ValidationResult};

/// Schema version for report profile files.
pub const CONFIG_SCHEMA_VERSION: &str = "1.0.0";
