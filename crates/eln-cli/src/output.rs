//! Rendering of command payloads for each output format.
//!
//! Every function returns the lines to print; callers decide the stream.

use crate::error::CliError;
use eln_common::{OutputFormat, SCHEMA_VERSION};
use eln_config::{LoadedProfile, ProfileLocation};
use eln_report::{ReactionReport, SectionKind};
use serde_json::{json, Value};

/// Wrap a command body in the standard envelope.
pub fn envelope(command: &str, body: Value) -> Value {
    let mut doc = json!({
        "schema_version": SCHEMA_VERSION,
        "generated_at": chrono::Utc::now().to_rfc3339(),
        "command": command,
    });
    if let (Value::Object(doc_map), Value::Object(body_map)) = (&mut doc, body) {
        doc_map.extend(body_map);
    }
    doc
}

fn profile_json(location: &ProfileLocation) -> Value {
    json!({
        "source": location.source.to_string(),
        "path": location.path.as_ref().map(|p| p.display().to_string()),
    })
}

/// Lines for `compose`.
pub fn render_reports(
    reports: &[ReactionReport],
    format: OutputFormat,
    location: &ProfileLocation,
) -> Result<Vec<String>, serde_json::Error> {
    match format {
        OutputFormat::Json => {
            let doc = envelope(
                "compose",
                json!({
                    "profile": profile_json(location),
                    "count": reports.len(),
                    "reports": reports,
                }),
            );
            Ok(vec![serde_json::to_string_pretty(&doc)?])
        }
        OutputFormat::Jsonl => reports.iter().map(serde_json::to_string).collect(),
        OutputFormat::Summary => Ok(reports.iter().map(ReactionReport::summary).collect()),
    }
}

fn section_json(kind: SectionKind) -> Value {
    json!({
        "kind": kind.as_str(),
        "title": kind.title(),
        "setting_key": kind.setting_key(),
    })
}

/// Lines for `sections`.
pub fn render_sections(format: OutputFormat) -> Result<Vec<String>, serde_json::Error> {
    match format {
        OutputFormat::Json => {
            let sections: Vec<Value> = SectionKind::ALL.into_iter().map(section_json).collect();
            let doc = envelope("sections", json!({ "sections": sections }));
            Ok(vec![serde_json::to_string_pretty(&doc)?])
        }
        OutputFormat::Jsonl => SectionKind::ALL
            .into_iter()
            .map(|kind| serde_json::to_string(&section_json(kind)))
            .collect(),
        OutputFormat::Summary => Ok(SectionKind::ALL
            .iter()
            .enumerate()
            .map(|(idx, kind)| {
                format!("{}. {} ({}) [{}]", idx + 1, kind, kind.title(), kind.setting_key())
            })
            .collect()),
    }
}

/// Lines for a successful `check`.
pub fn render_check(
    loaded: &LoadedProfile,
    format: OutputFormat,
) -> Result<Vec<String>, serde_json::Error> {
    let profile = &loaded.profile;
    let enabled = profile.settings.enabled_keys();

    match format {
        OutputFormat::Json | OutputFormat::Jsonl => {
            let doc = envelope(
                "check",
                json!({
                    "status": "ok",
                    "profile": profile_json(&loaded.location),
                    "profile_schema_version": profile.schema_version,
                    "enabled_sections": enabled,
                    "show_all_materials": profile.config.show_all_materials,
                    "diagram_mode": profile.config.diagram_mode(),
                    "image_paths": profile.config.image_paths,
                }),
            );
            let text = if format == OutputFormat::Json {
                serde_json::to_string_pretty(&doc)?
            } else {
                serde_json::to_string(&doc)?
            };
            Ok(vec![text])
        }
        OutputFormat::Summary => {
            let sections = if enabled.is_empty() {
                "none".to_string()
            } else {
                enabled.join(", ")
            };
            Ok(vec![format!(
                "check: OK ({}); sections: {}",
                loaded.location.source, sections
            )])
        }
    }
}

/// Lines describing a failed command.
pub fn render_error(command: &str, error: &CliError, format: OutputFormat) -> Vec<String> {
    let exit = error.exit_code();
    match format {
        OutputFormat::Json | OutputFormat::Jsonl => {
            let doc = envelope(
                command,
                json!({
                    "status": "error",
                    "error": {
                        "code": error.code(),
                        "kind": exit.code_name(),
                        "message": error.to_string(),
                    }
                }),
            );
            let text = if format == OutputFormat::Json {
                serde_json::to_string_pretty(&doc)
            } else {
                serde_json::to_string(&doc)
            };
            vec![text.unwrap_or_else(|_| error.to_string())]
        }
        OutputFormat::Summary => vec![format!("[eln-report] {} error: {}", command, error)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eln_common::Reaction;
    use eln_config::{ReportConfig, ReportProfile, ReportSettings};
    use eln_report::{ReportComposer, ReportError};

    fn reports() -> Vec<ReactionReport> {
        let composer = ReportComposer::new(
            ReportSettings::new().with("observation", true),
            ReportConfig::default(),
        );
        let reaction = Reaction {
            short_label: Some("R-9".to_string()),
            observation: Some("gas evolution".to_string()),
            ..Default::default()
        };
        vec![composer.compose(&reaction)]
    }

    #[test]
    fn test_envelope_fields() {
        let doc = envelope("compose", json!({"count": 0}));
        assert_eq!(doc["schema_version"], SCHEMA_VERSION);
        assert_eq!(doc["command"], "compose");
        assert_eq!(doc["count"], 0);
        assert!(doc["generated_at"].as_str().is_some());
    }

    #[test]
    fn test_render_reports_json() {
        let lines =
            render_reports(&reports(), OutputFormat::Json, &ProfileLocation::default()).unwrap();
        assert_eq!(lines.len(), 1);
        let doc: Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(doc["count"], 1);
        assert_eq!(doc["profile"]["source"], "builtin default");
        assert_eq!(doc["reports"][0]["sections"][0]["kind"], "observation");
    }

    #[test]
    fn test_render_reports_jsonl_and_summary() {
        let location = ProfileLocation::default();
        let lines = render_reports(&reports(), OutputFormat::Jsonl, &location).unwrap();
        let doc: Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(doc["header"]["short_label"], "R-9");

        let lines = render_reports(&reports(), OutputFormat::Summary, &location).unwrap();
        assert_eq!(lines, vec!["R-9: 1 section(s) [observation], no status"]);
    }

    #[test]
    fn test_render_sections() {
        let lines = render_sections(OutputFormat::Summary).unwrap();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "1. diagram (Diagram) [diagram]");
        assert_eq!(lines[5], "6. tlc (TLC - Control) [tlc]");

        let lines = render_sections(OutputFormat::Jsonl).unwrap();
        let last: Value = serde_json::from_str(&lines[8]).unwrap();
        assert_eq!(last["kind"], "literature");
    }

    #[test]
    fn test_render_check_summary() {
        let loaded = LoadedProfile {
            profile: ReportProfile {
                settings: ReportSettings::new().with("tlc", true),
                ..Default::default()
            },
            location: ProfileLocation::default(),
        };
        let lines = render_check(&loaded, OutputFormat::Summary).unwrap();
        assert_eq!(lines, vec!["check: OK (builtin default); sections: tlc"]);
    }

    #[test]
    fn test_render_error() {
        let err = CliError::from(ReportError::MissingReaction);
        let lines = render_error("compose", &err, OutputFormat::Jsonl);
        let doc: Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(doc["status"], "error");
        assert_eq!(doc["error"]["kind"], "ERR_INPUT");

        let lines = render_error("compose", &err, OutputFormat::Summary);
        assert!(lines[0].starts_with("[eln-report] compose error:"));
    }
}
