//! Reaction report composer for electronic lab notebook reactions.
//!
//! Turns a reaction record plus per-section settings into an ordered list of
//! renderable sections. Rendering (HTML, PDF, widgets) is left to consumers;
//! everything produced here is plain serializable data.
//!
//! # Sections
//!
//! - Diagram: reaction scheme image, or product molecule images
//! - Materials: starting materials, reactants and products with derived amounts
//! - Solvent: structured solvent lines or the free-text fallback
//! - Description: rich-text reaction description
//! - Purification: purification methods
//! - TLC - Control: rf value, TLC solvents and TLC description
//! - Observation: free-text observation
//! - Analysis: product analyses
//! - Literatures: literature references
//!
//! # Example
//!
//! ```
//! use eln_common::Reaction;
//! use eln_config::{ReportConfig, ReportSettings};
//! use eln_report::{ReportComposer, SectionKind};
//!
//! let composer = ReportComposer::new(
//!     ReportSettings::new().with("material", true),
//!     ReportConfig::default(),
//! );
//! let report = composer.compose(&Reaction::default());
//! assert_eq!(report.kinds(), vec![SectionKind::Materials, SectionKind::Solvent]);
//! ```

pub mod composer;
pub mod error;
pub mod quantity;
pub mod sections;
pub mod visibility;

pub use composer::{compose, ReactionReport, ReportComposer, ReportHeader};
pub use error::{ReportError, Result};
pub use sections::{Section, SectionKind};
