use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn bin(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("fursbliss-growth").unwrap();
    cmd.current_dir(dir).env_remove("FURSBLISS_BRAND_URL");
    cmd
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_plan_writes_three_batches() {
    let dir = TempDir::new().unwrap();

    bin(dir.path())
        .args(["plan", "--start-date", "2024-01-01", "--output-dir", "out/week1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("weekly_hooks.json"))
        .stdout(predicate::str::contains("ad_variants.json"))
        .stdout(predicate::str::contains("posting_queue.json"))
        .stdout(predicate::str::contains("Done. Review outputs before publishing."));

    let out = dir.path().join("out/week1");
    let hooks = read_json(&out.join("weekly_hooks.json"));
    let variants = read_json(&out.join("ad_variants.json"));
    let queue = read_json(&out.join("posting_queue.json"));

    assert_eq!(hooks["week_start"], "2024-01-01");
    assert_eq!(hooks["count"], 7);
    assert_eq!(hooks["items"][0]["day"], "2024-01-01");
    assert_eq!(hooks["items"][0]["angle"], "Emotional");
    assert_eq!(hooks["items"][0]["destination"], "https://www.fursbliss.com/quiz");
    assert_eq!(hooks["items"][1]["destination"], "https://www.fursbliss.com/longevity-drugs");

    assert_eq!(variants["count"], 5);
    assert!(variants.get("week_start").is_none());

    assert_eq!(queue["count"], 14);
    assert_eq!(queue["items"].as_array().unwrap().len(), 14);
    assert_eq!(queue["items"][0]["scheduled_local"], "2024-01-01 09:15");
    assert_eq!(queue["items"][0]["platform"], "X");
    assert_eq!(queue["items"][1]["scheduled_local"], "2024-01-01 12:30");
    assert_eq!(queue["items"][1]["platform"], "Facebook");
    assert_eq!(queue["items"][13]["scheduled_local"], "2024-01-07 12:30");

    // one generation instant for the whole run
    assert_eq!(hooks["generated_at_utc"], variants["generated_at_utc"]);
    assert_eq!(hooks["generated_at_utc"], queue["generated_at_utc"]);
    assert!(hooks["generated_at_utc"].as_str().unwrap().ends_with("+00:00"));
}

#[test]
fn test_plan_strips_trailing_slash() {
    let dir = TempDir::new().unwrap();

    bin(dir.path())
        .args(["plan", "--start-date", "2024-01-01", "--brand-url", "https://example.org/"])
        .assert()
        .success();

    let queue = read_json(&dir.path().join("fursbliss_growth/posting_queue.json"));
    for item in queue["items"].as_array().unwrap() {
        let destination = item["destination"].as_str().unwrap();
        assert!(destination.starts_with("https://example.org/"));
        assert!(!destination.contains("//quiz"));
    }
}

#[test]
fn test_plan_rejects_bad_start_date() {
    let dir = TempDir::new().unwrap();

    bin(dir.path())
        .args(["plan", "--start-date", "2024-13-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid start date"));

    assert!(!dir.path().join("fursbliss_growth").exists());
}

#[test]
fn test_plan_reads_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("fursbliss.yaml"),
        "brand_url: https://staging.fursbliss.com\noutput_dir: staged\nschedule:\n  x_post: \"08:00\"\n",
    )
    .unwrap();

    bin(dir.path())
        .args(["plan", "--start-date", "2024-01-01"])
        .assert()
        .success();

    let queue = read_json(&dir.path().join("staged/posting_queue.json"));
    assert_eq!(queue["items"][0]["scheduled_local"], "2024-01-01 08:00");
    assert_eq!(queue["items"][1]["scheduled_local"], "2024-01-01 12:30");
    assert_eq!(queue["items"][1]["destination"], "https://staging.fursbliss.com/quiz");
}

#[test]
fn test_plan_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();

    bin(dir.path())
        .args(["plan", "--start-date", "2024-01-01", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would queue 14 drafts"))
        .stdout(predicate::str::contains("2024-01-07 12:30"));

    assert!(!dir.path().join("fursbliss_growth").exists());
}

#[test]
fn test_commands_renders_planned_queue() {
    let dir = TempDir::new().unwrap();

    bin(dir.path())
        .args(["plan", "--start-date", "2024-01-01"])
        .assert()
        .success();

    bin(dir.path())
        .arg("commands")
        .assert()
        .success()
        .stdout(predicate::str::contains("openclaw_telegram_commands.md"))
        .stdout(predicate::str::contains("Done."));

    let doc =
        fs::read_to_string(dir.path().join("fursbliss_growth/openclaw_telegram_commands.md"))
            .unwrap();
    assert!(doc.contains("- Items: 14\n"));
    assert!(doc.contains("- Source queue: `fursbliss_growth/posting_queue.json`\n"));
    assert_eq!(doc.matches("Run this task:\n").count(), 14);
    assert_eq!(doc.matches("# schedule_stub_").count(), 14);
    assert!(doc.contains("### 1. X - Emotional hook\n"));
    assert!(doc.contains("### 14. Facebook - Urgency group post\n"));
    assert!(doc.contains("# name=fursbliss_facebook_loy_002_group_post\n"));
}

#[test]
fn test_commands_custom_paths() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("queue.json"),
        r#"{"items": [{"platform": "X", "title": "Only one"}, {}]}"#,
    )
    .unwrap();

    bin(dir.path())
        .args(["commands", "--queue", "queue.json", "--output", "deep/dir/out.md"])
        .assert()
        .success();

    let doc = fs::read_to_string(dir.path().join("deep/dir/out.md")).unwrap();
    assert!(doc.contains("### 1. X - Only one\n"));
    assert!(doc.contains("### 2. X - Untitled\n"));
    assert!(doc.contains("# when_local=unspecified\n"));
}

#[test]
fn test_commands_rejects_malformed_queue() {
    let dir = TempDir::new().unwrap();

    for (name, content) in [("foo.json", r#"{"foo": 1}"#), ("list.json", r#"[1, 2]"#)] {
        fs::write(dir.path().join(name), content).unwrap();

        bin(dir.path())
            .args(["commands", "--queue", name, "--output", "out.md"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("expected { items: [] }"));
    }

    assert!(!dir.path().join("out.md").exists());
}

#[test]
fn test_commands_missing_queue_fails() {
    let dir = TempDir::new().unwrap();

    bin(dir.path())
        .args(["commands", "--queue", "missing.json", "--output", "out.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.json"));

    assert!(!dir.path().join("out.md").exists());
}

#[test]
fn test_schema_prints_config_schema() {
    let dir = TempDir::new().unwrap();

    bin(dir.path())
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("brand_url"))
        .stdout(predicate::str::contains("facebook_group_post"));
}

#[test]
fn test_schema_written_to_file() {
    let dir = TempDir::new().unwrap();

    bin(dir.path())
        .args(["schema", "--output", "schema/config.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote:"));

    let schema = read_json(&dir.path().join("schema/config.json"));
    assert!(schema["properties"]["schedule"].is_object());
}

#[test]
fn test_plan_rejects_unpadded_start_date() {
    let dir = TempDir::new().unwrap();

    bin(dir.path())
        .args(["plan", "--start-date", "2024-1-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid start date"));

    assert!(!dir.path().join("fursbliss_growth").exists());
}

#[test]
fn test_plan_pads_configured_times() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("fursbliss.yaml"), "schedule:\n  x_post: \"9:15\"\n").unwrap();

    bin(dir.path())
        .args(["plan", "--start-date", "2024-01-01"])
        .assert()
        .success();

    let queue = read_json(&dir.path().join("fursbliss_growth/posting_queue.json"));
    assert_eq!(queue["items"][0]["scheduled_local"], "2024-01-01 09:15");
}

#[test]
fn test_explicit_missing_config_fails() {
    let dir = TempDir::new().unwrap();

    bin(dir.path())
        .args(["plan", "--start-date", "2024-01-01", "--config", "typo.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("typo.yaml"));

    assert!(!dir.path().join("fursbliss_growth").exists());

    bin(dir.path())
        .args(["commands", "--config", "typo.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("typo.yaml"));
}
