//! Report composer implementation.

use crate::error::{ReportError, Result};
use crate::sections::*;
use crate::visibility;

use eln_common::{Reaction, ReactionId};
use eln_config::{ReportConfig, ReportProfile, ReportSettings};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Report header, present regardless of settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportHeader {
    pub reaction_id: Option<ReactionId>,
    pub short_label: Option<String>,
    /// Status badge; absent for unset or unrecognized statuses.
    pub status: Option<StatusBadge>,
}

/// Composed report: header plus visible sections in canonical order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionReport {
    pub header: ReportHeader,
    pub sections: Vec<Section>,
}

impl ReactionReport {
    /// Get the report title.
    pub fn title(&self) -> String {
        self.header
            .short_label
            .clone()
            .filter(|label| !label.is_empty())
            .or_else(|| self.header.reaction_id.map(|id| format!("Reaction {}", id)))
            .unwrap_or_else(|| "Reaction Report".to_string())
    }

    /// Section of the given kind, if shown.
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind() == kind)
    }

    /// Kinds of the shown sections, in order.
    pub fn kinds(&self) -> Vec<SectionKind> {
        self.sections.iter().map(Section::kind).collect()
    }

    /// Whether no section is shown.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// One-line summary.
    pub fn summary(&self) -> String {
        let kinds: Vec<&str> = self.sections.iter().map(|s| s.kind().as_str()).collect();
        let status = self
            .header
            .status
            .as_ref()
            .map(|badge| badge.tooltip.as_str())
            .unwrap_or("no status");
        format!(
            "{}: {} section(s) [{}], {}",
            self.title(),
            kinds.len(),
            kinds.join(", "),
            status
        )
    }
}

type Visibility = fn(&Reaction, &ReportSettings) -> bool;
type Assembler = fn(&Reaction, &ReportConfig) -> Section;

/// One row of the dispatch table.
pub(crate) struct SectionEntry {
    pub(crate) kind: SectionKind,
    pub(crate) visible: Visibility,
    pub(crate) assemble: Assembler,
}

/// Sections in canonical order with their predicate and assembler.
pub(crate) const SECTION_TABLE: [SectionEntry; 9] = [
    SectionEntry {
        kind: SectionKind::Diagram,
        visible: visibility::show_diagram,
        assemble: assemble_diagram,
    },
    SectionEntry {
        kind: SectionKind::Materials,
        visible: visibility::show_materials,
        assemble: assemble_materials,
    },
    SectionEntry {
        kind: SectionKind::Solvent,
        visible: visibility::show_solvent,
        assemble: assemble_solvent,
    },
    SectionEntry {
        kind: SectionKind::Description,
        visible: visibility::show_description,
        assemble: assemble_description,
    },
    SectionEntry {
        kind: SectionKind::Purification,
        visible: visibility::show_purification,
        assemble: assemble_purification,
    },
    SectionEntry {
        kind: SectionKind::Tlc,
        visible: visibility::show_tlc,
        assemble: assemble_tlc,
    },
    SectionEntry {
        kind: SectionKind::Observation,
        visible: visibility::show_observation,
        assemble: assemble_observation,
    },
    SectionEntry {
        kind: SectionKind::Analyses,
        visible: visibility::show_analyses,
        assemble: assemble_analyses,
    },
    SectionEntry {
        kind: SectionKind::Literature,
        visible: visibility::show_literature,
        assemble: assemble_literature,
    },
];

fn assemble_diagram(reaction: &Reaction, config: &ReportConfig) -> Section {
    Section::Diagram(DiagramSection::build(reaction, config))
}

fn assemble_materials(reaction: &Reaction, _config: &ReportConfig) -> Section {
    Section::Materials(MaterialsSection::build(reaction))
}

fn assemble_solvent(reaction: &Reaction, _config: &ReportConfig) -> Section {
    Section::Solvent(SolventSection::build(
        &reaction.solvents,
        reaction.solvent.as_deref(),
    ))
}

fn assemble_description(reaction: &Reaction, _config: &ReportConfig) -> Section {
    Section::Description(DescriptionSection::build(&reaction.description))
}

fn assemble_purification(reaction: &Reaction, _config: &ReportConfig) -> Section {
    Section::Purification(PurificationSection::build(&reaction.purification))
}

fn assemble_tlc(reaction: &Reaction, _config: &ReportConfig) -> Section {
    Section::Tlc(TlcSection::build(reaction))
}

fn assemble_observation(reaction: &Reaction, _config: &ReportConfig) -> Section {
    Section::Observation(ObservationSection::build(reaction.observation.as_deref()))
}

fn assemble_analyses(reaction: &Reaction, _config: &ReportConfig) -> Section {
    Section::Analyses(AnalysesSection::build(&reaction.products))
}

fn assemble_literature(reaction: &Reaction, _config: &ReportConfig) -> Section {
    Section::Literature(LiteratureSection::build(&reaction.literatures))
}

/// Compose a report for one reaction.
pub fn compose(reaction: &Reaction, settings: &ReportSettings, config: &ReportConfig) -> ReactionReport {
    let mut sections = Vec::with_capacity(SECTION_TABLE.len());
    for entry in &SECTION_TABLE {
        let visible = (entry.visible)(reaction, settings);
        debug!(section = %entry.kind, visible, "section visibility resolved");
        if visible {
            sections.push((entry.assemble)(reaction, config));
        }
    }

    ReactionReport {
        header: ReportHeader {
            reaction_id: reaction.id,
            short_label: reaction.short_label.clone(),
            status: StatusBadge::from_raw(reaction.status.as_deref()),
        },
        sections,
    }
}

/// Report composer bound to one settings/config pair.
#[derive(Debug, Clone, Default)]
pub struct ReportComposer {
    settings: ReportSettings,
    config: ReportConfig,
}

impl ReportComposer {
    /// Create a composer.
    pub fn new(settings: ReportSettings, config: ReportConfig) -> Self {
        Self { settings, config }
    }

    /// Create a composer from a loaded profile.
    pub fn from_profile(profile: &ReportProfile) -> Self {
        Self::new(profile.settings, profile.config.clone())
    }

    /// Get the section settings.
    pub fn settings(&self) -> &ReportSettings {
        &self.settings
    }

    /// Get the display config.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Compose a report for a reaction.
    pub fn compose(&self, reaction: &Reaction) -> ReactionReport {
        let report = compose(reaction, &self.settings, &self.config);
        info!(
            reaction_id = ?reaction.id,
            title = %report.title(),
            sections = report.sections.len(),
            "Report composed"
        );
        report
    }

    /// Compose a report, failing if the reaction record is absent.
    pub fn try_compose(&self, reaction: Option<&Reaction>) -> Result<ReactionReport> {
        let reaction = reaction.ok_or(ReportError::MissingReaction)?;
        Ok(self.compose(reaction))
    }

    /// Compose a report from a reaction JSON document.
    ///
    /// A JSON `null` document is treated as an absent reaction.
    pub fn compose_json(&self, json: &str) -> Result<ReactionReport> {
        let reaction: Option<Reaction> = serde_json::from_str(json)?;
        self.try_compose(reaction.as_ref())
    }

    /// Compose reports for several reactions, preserving input order.
    pub fn compose_batch(&self, reactions: &[Reaction]) -> Vec<ReactionReport> {
        debug!(count = reactions.len(), "Composing report batch");
        reactions.iter().map(|r| self.compose(r)).collect()
    }
}
