//! End-to-end tests for the eln-report binary.
//!
//! Each test runs the real binary against files in a temp directory, with
//! profile discovery pinned to that directory.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const REACTION: &str = r#"{
    "id": 17,
    "short_label": "JD-17",
    "status": "Successful",
    "solvent": "DCM",
    "observation": "white precipitate",
    "products": [{
        "short_label": "JD-17-P1",
        "molecule": {"sum_formular": "C8H8O", "iupac_name": "acetophenone", "molecule_svg_file": "p1.svg"},
        "amount_g": 0.001,
        "amount_mol": 0.000001,
        "equivalent": 1.0
    }]
}"#;

/// Binary with profile discovery confined to `dir`.
fn eln_report(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("eln-report").expect("eln-report binary should exist");
    cmd.env_remove("ELN_REPORT_PROFILE")
        .env_remove("RUST_LOG")
        .env("ELN_REPORT_CONFIG_DIR", dir.path().join("config"))
        .env("XDG_CONFIG_HOME", dir.path().join("xdg"))
        .env("HOME", dir.path());
    cmd
}

fn write(path: &Path, contents: &str) {
    fs::write(path, contents).expect("write fixture");
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn compose_with_all_sections() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("reaction.json");
    write(&input, REACTION);

    let output = eln_report(&dir)
        .args(["compose", "--all-sections"])
        .arg(&input)
        .output()
        .expect("run");
    assert!(output.status.success());

    let doc = stdout_json(&output);
    assert_eq!(doc["command"], "compose");
    assert_eq!(doc["count"], 1);
    assert!(doc["generated_at"].is_string());

    let report = &doc["reports"][0];
    assert_eq!(report["header"]["short_label"], "JD-17");
    assert_eq!(report["header"]["status"]["tooltip"], "Successful Reaction");

    let kinds: Vec<&str> = report["sections"]
        .as_array()
        .expect("sections")
        .iter()
        .filter_map(|s| s["kind"].as_str())
        .collect();
    assert_eq!(kinds, vec!["diagram", "materials", "solvent", "observation"]);

    let products = &report["sections"][1]["content"]["groups"][2];
    assert_eq!(products["label"], "Products");
    assert_eq!(products["rows"][0]["mass_mg"], "1.000");
    assert_eq!(products["rows"][0]["equivalent_or_yield"], "100%");
}

#[test]
fn compose_uses_profile_file() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("reaction.json");
    let profile = dir.path().join("profile.json");
    write(&input, REACTION);
    write(
        &profile,
        r#"{"settings": {"observation": true}, "config": {"showAllMaterials": true}}"#,
    );

    eln_report(&dir)
        .args(["--format", "summary", "compose", "--profile"])
        .arg(&profile)
        .arg(&input)
        .assert()
        .success()
        .stdout("JD-17: 1 section(s) [observation], Successful Reaction\n");
}

#[test]
fn compose_reads_stdin_array() {
    let dir = TempDir::new().expect("tempdir");
    eln_report(&dir)
        .args(["-f", "jsonl", "compose", "-"])
        .write_stdin(r#"[{"short_label": "A"}, {"short_label": "B"}]"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""short_label":"A""#))
        .stdout(predicate::function(|out: &str| out.lines().count() == 2));
}

#[test]
fn compose_null_input_is_missing_reaction() {
    let dir = TempDir::new().expect("tempdir");
    eln_report(&dir)
        .args(["compose", "-"])
        .write_stdin("null")
        .assert()
        .code(12)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("ERR_INPUT"));
}

#[test]
fn compose_missing_file_is_input_error() {
    let dir = TempDir::new().expect("tempdir");
    eln_report(&dir)
        .args(["-f", "summary", "compose"])
        .arg(dir.path().join("absent.json"))
        .assert()
        .code(12)
        .stderr(predicate::str::contains("[eln-report] compose error"));
}

#[test]
fn compose_invalid_profile_is_config_error() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("reaction.json");
    let profile = dir.path().join("bad.json");
    write(&input, REACTION);
    write(&profile, r#"{"settings": {"diagram": "yes"}}"#);

    eln_report(&dir)
        .args(["compose", "--profile"])
        .arg(&profile)
        .arg(&input)
        .assert()
        .code(11)
        .stderr(predicate::str::contains("ERR_CONFIG"));
}

#[test]
fn check_reports_builtin_default() {
    let dir = TempDir::new().expect("tempdir");
    let output = eln_report(&dir).arg("check").output().expect("run");
    assert!(output.status.success());

    let doc = stdout_json(&output);
    assert_eq!(doc["status"], "ok");
    assert_eq!(doc["profile"]["source"], "builtin default");
    assert_eq!(doc["diagram_mode"], "products_only");
    assert_eq!(doc["enabled_sections"].as_array().map(Vec::len), Some(0));
}

#[test]
fn check_finds_profile_in_config_dir() {
    let dir = TempDir::new().expect("tempdir");
    let config_dir = dir.path().join("config");
    fs::create_dir_all(&config_dir).expect("mkdir");
    write(
        &config_dir.join("profile.json"),
        r#"{"settings": {"tlc": true, "literature": true}}"#,
    );

    eln_report(&dir)
        .args(["check", "-f", "summary"])
        .assert()
        .success()
        .stdout("check: OK (environment variable); sections: tlc, literature\n");
}

#[test]
fn check_rejects_version_mismatch() {
    let dir = TempDir::new().expect("tempdir");
    let profile = dir.path().join("profile.json");
    write(&profile, r#"{"schema_version": "9.0.0"}"#);

    eln_report(&dir)
        .args(["check", "--profile"])
        .arg(&profile)
        .assert()
        .code(11)
        .stderr(predicate::str::contains("Version mismatch"));
}

#[test]
fn sections_lists_canonical_order() {
    let dir = TempDir::new().expect("tempdir");
    eln_report(&dir)
        .args(["sections", "--format", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1. diagram (Diagram) [diagram]\n"))
        .stdout(predicate::str::contains("9. literature (Literatures) [literature]"));
}

#[test]
fn unknown_command_is_args_error() {
    let dir = TempDir::new().expect("tempdir");
    eln_report(&dir)
        .arg("render")
        .assert()
        .code(10)
        .stderr(predicate::str::contains("error"));
}

#[test]
fn help_exits_cleanly() {
    let dir = TempDir::new().expect("tempdir");
    eln_report(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("compose"));
}
