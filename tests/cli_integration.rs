/// CLI integration tests for macrolog.
///
/// Each test spawns the compiled binary via the `assert_cmd::cargo_bin_cmd!`
/// macro and sets `MACROLOG_HOME` to a fresh `TempDir` so tests are fully
/// isolated from the developer's real `~/.macrolog` data.
use assert_cmd::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

// ── helpers ──────────────────────────────────────────────────────────────────

/// Returns a `Command` with `MACROLOG_HOME` pointing at `dir`.
fn cmd_in(dir: &TempDir) -> assert_cmd::Command {
    let mut c = cargo_bin_cmd!("macrolog");
    c.env("MACROLOG_HOME", dir.path());
    c
}

/// Run `macrolog init --skip` so the state file exists before subsequent
/// commands.
fn init_dir(dir: &TempDir) {
    cmd_in(dir).args(["init", "--skip"]).assert().success();
}

/// Parse stdout JSON and return the root `Value`.
fn parse_json(output: &assert_cmd::assert::Assert) -> Value {
    let bytes = output.get_output().stdout.clone();
    serde_json::from_slice(&bytes).expect("stdout is not valid JSON")
}

/// Parse stderr JSON and return the root `Value`.
fn parse_stderr_json(output: &assert_cmd::assert::Assert) -> Value {
    let bytes = output.get_output().stderr.clone();
    serde_json::from_slice(&bytes).expect("stderr is not valid JSON")
}

// ── init ─────────────────────────────────────────────────────────────────────

#[test]
fn test_init_skip_creates_state_file() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["init", "--skip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("State initialized"));

    assert!(
        dir.path().join("state.json").exists(),
        "state.json should be created by init --skip"
    );
}

#[test]
fn test_init_skip_is_idempotent() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir).args(["init", "--skip"]).assert().success();
    cmd_in(&dir).args(["init", "--skip"]).assert().success();
}

#[test]
fn test_fresh_state_contains_seeded_breakfast() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    let assert = cmd_in(&dir).arg("show").assert().success();
    let json = parse_json(&assert);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["data"]["log"]["meals"][0]["name"], "Breakfast");
}

// ── meal add / remove ────────────────────────────────────────────────────────

#[test]
fn test_meal_add_with_item_specs() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    let assert = cmd_in(&dir)
        .args([
            "--date",
            "2026-03-05",
            "meal",
            "add",
            "Lunch",
            "--emoji",
            "🥪",
            "--item",
            "Sandwich,350,18,40,12",
            "--item",
            "Apple,95,0,25,0",
        ])
        .assert()
        .success();

    let json = parse_json(&assert);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["command"], "meal");
    assert_eq!(json["data"]["meal"]["name"], "Lunch");
    assert_eq!(json["data"]["meal"]["emoji"], "🥪");
    assert_eq!(json["data"]["meal"]["items"].as_array().unwrap().len(), 2);
    assert_eq!(json["data"]["totals"]["calories"], 445);
}

#[test]
fn test_meal_add_batch_json() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    let batch = r#"[{"name": "Oats", "calories": 160, "protein": 6, "carbs": 27, "fat": 3}]"#;
    let assert = cmd_in(&dir)
        .args(["--date", "2026-03-05", "meal", "add", "Breakfast", "--batch", batch])
        .assert()
        .success();

    let json = parse_json(&assert);
    assert_eq!(json["data"]["meal"]["items"][0]["name"], "Oats");
    assert_eq!(json["data"]["meal"]["items"][0]["nutrients"]["calories"], 160);
}

#[test]
fn test_meal_add_default_emoji() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    let assert = cmd_in(&dir)
        .args(["--date", "2026-03-05", "meal", "add", "Dinner"])
        .assert()
        .success();

    let json = parse_json(&assert);
    assert_eq!(json["data"]["meal"]["emoji"], "🍽️");
}

#[test]
fn test_meal_add_rejects_bad_numbers() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    let assert = cmd_in(&dir)
        .args([
            "--date",
            "2026-03-05",
            "meal",
            "add",
            "Lunch",
            "--item",
            "Sandwich,abc,18,40,12",
        ])
        .assert()
        .failure();

    let json = parse_stderr_json(&assert);
    assert_eq!(json["status"], "error");
    assert_eq!(json["error"]["code"], "invalid_numbers");
}

#[test]
fn test_meal_add_rejects_blank_name() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    let assert = cmd_in(&dir)
        .args([
            "--date",
            "2026-03-05",
            "meal",
            "add",
            "Lunch",
            "--item",
            "  ,100,1,1,1",
        ])
        .assert()
        .failure();

    let json = parse_stderr_json(&assert);
    assert_eq!(json["error"]["code"], "invalid_name");
}

#[test]
fn test_meal_remove_round_trip() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    let assert = cmd_in(&dir)
        .args(["--date", "2026-03-05", "meal", "add", "Lunch", "--item", "Rice,200,4,44,0"])
        .assert()
        .success();
    let meal_id = parse_json(&assert)["data"]["meal"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    cmd_in(&dir)
        .args(["--date", "2026-03-05", "meal", "remove", &meal_id])
        .assert()
        .success();

    let assert = cmd_in(&dir).args(["--date", "2026-03-05", "show"]).assert().success();
    let json = parse_json(&assert);
    assert_eq!(json["data"]["log"]["meals"], serde_json::json!([]));
}

#[test]
fn test_meal_remove_unknown_id_fails() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    let assert = cmd_in(&dir)
        .args(["--date", "2026-03-05", "meal", "remove", "nope"])
        .assert()
        .failure();

    let json = parse_stderr_json(&assert);
    assert_eq!(json["error"]["code"], "general_error");
}

// ── goal / status ────────────────────────────────────────────────────────────

#[test]
fn test_goal_set_and_status_needs_attention() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    cmd_in(&dir)
        .args(["--date", "2026-03-05", "meal", "add", "Breakfast", "--item", "Eggs,150,0,0,0"])
        .assert()
        .success();

    cmd_in(&dir)
        .args(["goal", "set", "--calories", "100"])
        .assert()
        .success();

    let assert = cmd_in(&dir).args(["--date", "2026-03-05", "status"]).assert().success();
    let json = parse_json(&assert);
    assert_eq!(json["data"]["goal_status"]["status"], "needs_attention");
    assert_eq!(json["data"]["goal_status"]["issues"][0]["kind"], "over_calories");
    assert_eq!(json["data"]["goal_status"]["issues"][0]["by"], 50);
}

#[test]
fn test_goal_clear_returns_to_on_track() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    cmd_in(&dir)
        .args(["goal", "set", "--calories", "1"])
        .assert()
        .success();
    cmd_in(&dir).args(["goal", "clear"]).assert().success();

    let assert = cmd_in(&dir)
        .args(["--date", "2026-03-05", "goal", "show"])
        .assert()
        .success();
    let json = parse_json(&assert);
    assert_eq!(json["data"]["goal_status"]["status"], "on_track");
    assert_eq!(json["data"]["goals"]["dailyCalories"], Value::Null);
}

// ── recents ──────────────────────────────────────────────────────────────────

#[test]
fn test_recents_lists_added_foods_newest_first() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    // A day after the seeded one, so the rebuild puts Rice in front.
    cmd_in(&dir)
        .args(["--date", "2100-01-01", "meal", "add", "Lunch", "--item", "Rice,200,4,44,0"])
        .assert()
        .success();

    let assert = cmd_in(&dir).args(["recents", "--foods"]).assert().success();
    let json = parse_json(&assert);
    assert_eq!(json["data"]["foods"][0]["name"], "Rice");
    assert!(json["data"].get("meals").is_none());
}

// ── config ───────────────────────────────────────────────────────────────────

#[test]
fn test_config_set_name_persists() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    cmd_in(&dir)
        .args(["config", "set", "name", "Maya"])
        .assert()
        .success();

    let assert = cmd_in(&dir).args(["config", "show"]).assert().success();
    let json = parse_json(&assert);
    assert_eq!(json["data"]["userFirstName"], "Maya");
}

#[test]
fn test_config_set_unknown_key_fails() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    cmd_in(&dir)
        .args(["config", "set", "color", "blue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown config key"));
}

// ── human output ─────────────────────────────────────────────────────────────

#[test]
fn test_show_human_renders_table() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    cmd_in(&dir)
        .args(["--date", "2026-03-05", "meal", "add", "Lunch", "--item", "Rice,200,4,44,0"])
        .assert()
        .success();

    cmd_in(&dir)
        .args(["--human", "--date", "2026-03-05", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rice").and(predicate::str::contains("Total")));
}
