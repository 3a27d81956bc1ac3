// Integration tests for the toptier CLI.
//
// Records and generated content are written to temp dirs and fed to the
// binary; assertions cover stdout, stderr, exit codes and written previews.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn toptier(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("toptier").expect("binary should exist");
    cmd.current_dir(cwd).env("HOME", cwd).env_remove("RUST_LOG");
    cmd
}

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("fixture should write");
    path
}

const SCENARIO_A: &str = r#"{
    "model_name": "acme/photon",
    "display_name": "Photon",
    "huggingface_url": "https://huggingface.co/acme/photon",
    "license": "MIT",
    "readme_content": "turbo, fast, real-time",
    "model_metadata": {"accuracy": 0.91, "downloads": 4000}
}"#;

const BARE: &str = r#"{"model_name": "acme/plain", "display_name": "Plain"}"#;

#[test]
fn cli_version_flag() {
    let dir = TempDir::new().expect("temp dir should be created");
    toptier(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("toptier"));
}

#[test]
fn cli_help_flag() {
    let dir = TempDir::new().expect("temp dir should be created");
    toptier(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Score, tier and package"));
}

#[test]
fn score_requires_record_path() {
    let dir = TempDir::new().expect("temp dir should be created");
    toptier(dir.path())
        .arg("score")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn score_prints_flat_json_record() {
    let dir = TempDir::new().expect("temp dir should be created");
    let record = write_file(dir.path(), "record.json", SCENARIO_A);

    let output = toptier(dir.path())
        .arg("score")
        .arg(&record)
        .output()
        .expect("score should run");
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).expect("stdout should be json");
    assert_eq!(value["quality_score"], 60.0);
    assert_eq!(value["speed_score"], 82.0);
    assert_eq!(value["freedom_score"], 90.0);
    assert_eq!(value["overall_score"], 77.35);
    assert_eq!(value["tier"], "B");
    assert_eq!(value["benchmarks"]["accuracy"], 0.91);
    assert!(value["benchmarks"].get("downloads").is_none());
    let tag_names: Vec<_> = value["tags"]
        .as_array()
        .expect("tags should be an array")
        .iter()
        .map(|tag| tag["tag_name"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(tag_names, vec!["Open Source", "Free"]);
}

#[test]
fn score_bare_record_lands_in_d_tier() {
    let dir = TempDir::new().expect("temp dir should be created");
    let record = write_file(dir.path(), "record.json", BARE);

    toptier(dir.path())
        .args(["score", "--category", "Other"])
        .arg(&record)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"overall_score\": 56.66"))
        .stdout(predicate::str::contains("\"tier\": \"D\""));
}

#[test]
fn supplied_scores_override_heuristics() {
    let dir = TempDir::new().expect("temp dir should be created");
    let record = write_file(dir.path(), "record.json", SCENARIO_A);

    toptier(dir.path())
        .args(["score", "--quality", "95", "--speed", "95", "--freedom", "95"])
        .arg(&record)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"overall_score\": 95.0"))
        .stdout(predicate::str::contains("\"tier\": \"S\""));
}

#[test]
fn score_markdown_format() {
    let dir = TempDir::new().expect("temp dir should be created");
    let record = write_file(dir.path(), "record.json", SCENARIO_A);

    toptier(dir.path())
        .args(["score", "--format", "md"])
        .arg(&record)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Photon"))
        .stdout(predicate::str::contains("Overall score: 77.35 (B Tier, Good)"));
}

#[test]
fn out_of_range_supplied_score_exits_with_code_2() {
    let dir = TempDir::new().expect("temp dir should be created");
    let record = write_file(dir.path(), "record.json", BARE);

    toptier(dir.path())
        .args(["score", "--speed", "120"])
        .arg(&record)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("speed score out of range"));
}

#[test]
fn record_without_identity_exits_with_code_2() {
    let dir = TempDir::new().expect("temp dir should be created");
    let record = write_file(dir.path(), "record.json", r#"{"display_name": "Nameless"}"#);

    toptier(dir.path())
        .arg("score")
        .arg(&record)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("model_name must not be empty"));
}

#[test]
fn unknown_category_exits_with_code_2() {
    let dir = TempDir::new().expect("temp dir should be created");
    let record = write_file(dir.path(), "record.json", BARE);

    toptier(dir.path())
        .args(["score", "--category", "painting"])
        .arg(&record)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown category: painting"));
}

#[test]
fn missing_record_file_exits_with_code_3() {
    let dir = TempDir::new().expect("temp dir should be created");

    toptier(dir.path())
        .args(["score", "does-not-exist.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("io error"));
}

#[test]
fn classify_prints_category() {
    let dir = TempDir::new().expect("temp dir should be created");
    let record = write_file(
        dir.path(),
        "record.json",
        r#"{"model_name": "stabilityai/sdxl-turbo", "display_name": "SDXL Turbo", "tags": ["text-to-image"]}"#,
    );

    toptier(dir.path())
        .arg("classify")
        .arg(&record)
        .assert()
        .success()
        .stdout(predicate::str::contains("Image Generation"));
}

#[test]
fn tags_prints_badges_in_order() {
    let dir = TempDir::new().expect("temp dir should be created");
    let record = write_file(
        dir.path(),
        "record.json",
        r#"{"model_name": "acme/vault", "display_name": "Vault", "license": "apache-2.0", "readme_content": "Checkpoint available. Enterprise pricing applies."}"#,
    );

    toptier(dir.path())
        .arg("tags")
        .arg(&record)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "#28a745 Open Source Full source code available\n#7ed957 Open Weights",
        ))
        .stdout(predicate::str::contains("#dc3545 Closed / Paid"));
}

#[test]
fn methodology_reflects_config_file() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_file(
        dir.path(),
        "toptier.toml",
        r#"
[weights]
quality = 0.5
speed = 0.25
freedom = 0.25
"#,
    );

    toptier(dir.path())
        .arg("methodology")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Overall Score = (Quality × 0.5) + (Speed × 0.25) + (Freedom × 0.25)",
        ));
}

#[test]
fn invalid_config_exits_with_code_3() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_file(
        dir.path(),
        "toptier.toml",
        r#"
[weights]
quality = 0.9
"#,
    );

    toptier(dir.path())
        .arg("methodology")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("must sum to 1.0"));
}

#[test]
fn legacy_scheme_via_explicit_config() {
    let dir = TempDir::new().expect("temp dir should be created");
    let config = write_file(
        dir.path(),
        "legacy.toml",
        r#"
[scoring]
scheme = "legacy"
"#,
    );
    let record = write_file(dir.path(), "record.json", BARE);

    toptier(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("score")
        .arg(&record)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"performance_score\""))
        .stdout(predicate::str::contains("\"production_score\""));
}

#[test]
fn preview_writes_session_file() {
    let dir = TempDir::new().expect("temp dir should be created");
    let record = write_file(dir.path(), "record.json", SCENARIO_A);
    let article = write_file(
        dir.path(),
        "article.json",
        r#"{"title": "Photon is fast", "content": "body", "quality_score": 88, "speed_score": 91, "freedom_score": 93}"#,
    );
    let social = write_file(
        dir.path(),
        "social.json",
        r##"{"content": "Photon ships today", "hashtags": ["#ai"]}"##,
    );
    let out = dir.path().join("data");

    toptier(dir.path())
        .arg("preview")
        .arg(&record)
        .arg("--article")
        .arg(&article)
        .arg("--social")
        .arg(&social)
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("preview file:"));

    let previews: Vec<_> = fs::read_dir(out.join("previews"))
        .expect("previews dir should exist")
        .filter_map(|entry| entry.ok())
        .collect();
    assert_eq!(previews.len(), 1);

    let session: Value = serde_json::from_str(
        &fs::read_to_string(previews[0].path()).expect("preview should read"),
    )
    .expect("preview should be json");
    assert_eq!(session["publish_status"], "draft");
    assert_eq!(session["scores_data"]["quality_score"], 88.0);
    assert_eq!(session["scores_data"]["tier"], "S");
    assert_eq!(session["article_data"]["slug"], "photon");
    assert_eq!(session["linkedin_data"]["character_count"], 18);
}

#[test]
fn validate_url_accepts_model_pages_only() {
    let dir = TempDir::new().expect("temp dir should be created");
    toptier(dir.path())
        .args(["validate-url", "https://huggingface.co/stabilityai/sdxl-turbo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ok:"));

    toptier(dir.path())
        .args(["validate-url", "https://github.com/stabilityai/sdxl-turbo"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not a hugging face model url"));
}
