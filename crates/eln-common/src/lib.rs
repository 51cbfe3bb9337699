//! Shared types for electronic-lab-notebook report composition.
//!
//! This crate provides the read-only input model handed to the report
//! composer by the persistence layer:
//! - Reactions, samples, molecules, analyses, solvents and literature
//! - Reaction status interpretation
//! - Rich-text values carried verbatim for renderers
//! - Presence helpers shared by visibility checks and section assemblers
//! - Output formats for the command line

pub mod id;
pub mod model;
pub mod output;
pub mod presence;
pub mod rich_text;

pub use id::ReactionId;
pub use model::{
    Analysis, Literature, MaterialRole, Molecule, Reaction, ReactionStatus, Sample, Solvent,
};
pub use output::OutputFormat;
pub use rich_text::RichText;

/// Schema version for reaction documents accepted by the composer.
pub const SCHEMA_VERSION: &str = "1.0.0";
