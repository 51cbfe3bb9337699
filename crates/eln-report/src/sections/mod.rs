//! Report section data structures and their assemblers.

pub mod analyses;
pub mod diagram;
pub mod literature;
pub mod materials;
pub mod purification;
pub mod solvent;
pub mod status;
pub mod text;
pub mod tlc;

pub use analyses::{AnalysesSection, AnalysisEntry, AnalysisKey};
pub use diagram::{DiagramSection, ImageRef};
pub use literature::{LiteratureRow, LiteratureSection};
pub use materials::{MaterialGroup, MaterialHeader, MaterialRow, MaterialsSection, MATERIAL_COLUMNS};
pub use purification::PurificationSection;
pub use solvent::SolventSection;
pub use status::{StatusBadge, StatusMarker};
pub use text::{DescriptionSection, ObservationSection};
pub use tlc::TlcSection;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a report section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Diagram,
    Materials,
    Solvent,
    Description,
    Purification,
    Tlc,
    Observation,
    Analyses,
    Literature,
}

impl SectionKind {
    /// All kinds in canonical report order.
    pub const ALL: [SectionKind; 9] = [
        SectionKind::Diagram,
        SectionKind::Materials,
        SectionKind::Solvent,
        SectionKind::Description,
        SectionKind::Purification,
        SectionKind::Tlc,
        SectionKind::Observation,
        SectionKind::Analyses,
        SectionKind::Literature,
    ];

    /// Identifier used in serialized reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Diagram => "diagram",
            SectionKind::Materials => "materials",
            SectionKind::Solvent => "solvent",
            SectionKind::Description => "description",
            SectionKind::Purification => "purification",
            SectionKind::Tlc => "tlc",
            SectionKind::Observation => "observation",
            SectionKind::Analyses => "analyses",
            SectionKind::Literature => "literature",
        }
    }

    /// Heading shown above the section.
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Diagram => "Diagram",
            SectionKind::Materials => "Materials",
            SectionKind::Solvent => "Solvent",
            SectionKind::Description => "Description",
            SectionKind::Purification => "Purification",
            SectionKind::Tlc => "TLC - Control",
            SectionKind::Observation => "Observation",
            SectionKind::Analyses => "Analysis",
            SectionKind::Literature => "Literatures",
        }
    }

    /// Settings key that toggles this section.
    pub fn setting_key(&self) -> &'static str {
        match self {
            SectionKind::Diagram => "diagram",
            SectionKind::Materials | SectionKind::Solvent => "material",
            SectionKind::Description => "description",
            SectionKind::Purification => "purification",
            SectionKind::Tlc => "tlc",
            SectionKind::Observation => "observation",
            SectionKind::Analyses => "analysis",
            SectionKind::Literature => "literature",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One assembled section, tagged with its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum Section {
    Diagram(DiagramSection),
    Materials(MaterialsSection),
    Solvent(SolventSection),
    Description(DescriptionSection),
    Purification(PurificationSection),
    Tlc(TlcSection),
    Observation(ObservationSection),
    Analyses(AnalysesSection),
    Literature(LiteratureSection),
}

impl Section {
    /// Kind of this section.
    pub fn kind(&self) -> SectionKind {
        match self {
            Section::Diagram(_) => SectionKind::Diagram,
            Section::Materials(_) => SectionKind::Materials,
            Section::Solvent(_) => SectionKind::Solvent,
            Section::Description(_) => SectionKind::Description,
            Section::Purification(_) => SectionKind::Purification,
            Section::Tlc(_) => SectionKind::Tlc,
            Section::Observation(_) => SectionKind::Observation,
            Section::Analyses(_) => SectionKind::Analyses,
            Section::Literature(_) => SectionKind::Literature,
        }
    }

    /// Heading shown above the section.
    pub fn title(&self) -> &'static str {
        self.kind().title()
    }
}
