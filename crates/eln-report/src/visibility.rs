//! Section visibility.
//!
//! A settings toggle expresses intent to consider a section; data presence is
//! an independent gate. Diagram, materials and solvent only need the toggle
//! because an empty image list or an empty table is an acceptable body.

use crate::sections::SectionKind;
use eln_common::{presence, Reaction, Sample};
use eln_config::ReportSettings;

pub fn show_diagram(_reaction: &Reaction, settings: &ReportSettings) -> bool {
    settings.diagram
}

pub fn show_materials(_reaction: &Reaction, settings: &ReportSettings) -> bool {
    settings.material
}

/// Solvents share the materials toggle.
pub fn show_solvent(_reaction: &Reaction, settings: &ReportSettings) -> bool {
    settings.material
}

pub fn show_description(reaction: &Reaction, settings: &ReportSettings) -> bool {
    settings.description && reaction.description.is_present()
}

pub fn show_purification(reaction: &Reaction, settings: &ReportSettings) -> bool {
    settings.purification && presence::list(&reaction.purification)
}

/// Gated on the TLC description only; rf value and solvents ride along.
pub fn show_tlc(reaction: &Reaction, settings: &ReportSettings) -> bool {
    settings.tlc && presence::text(reaction.tlc_description.as_deref())
}

pub fn show_observation(reaction: &Reaction, settings: &ReportSettings) -> bool {
    settings.observation && presence::text(reaction.observation.as_deref())
}

/// Any non-null analysis on any product counts, even one with empty fields.
pub fn show_analyses(reaction: &Reaction, settings: &ReportSettings) -> bool {
    settings.analysis && reaction.products.iter().any(Sample::has_analyses)
}

pub fn show_literature(reaction: &Reaction, settings: &ReportSettings) -> bool {
    settings.literature && presence::list(&reaction.literatures)
}

/// Whether a section of the given kind appears in the report.
pub fn is_visible(kind: SectionKind, reaction: &Reaction, settings: &ReportSettings) -> bool {
    let predicate: fn(&Reaction, &ReportSettings) -> bool = match kind {
        SectionKind::Diagram => show_diagram,
        SectionKind::Materials => show_materials,
        SectionKind::Solvent => show_solvent,
        SectionKind::Description => show_description,
        SectionKind::Purification => show_purification,
        SectionKind::Tlc => show_tlc,
        SectionKind::Observation => show_observation,
        SectionKind::Analyses => show_analyses,
        SectionKind::Literature => show_literature,
    };
    predicate(reaction, settings)
}
