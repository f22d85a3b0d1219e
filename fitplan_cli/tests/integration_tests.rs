//! Integration tests for the fitplan binary.
//!
//! These tests verify end-to-end behavior including:
//! - Profile editing and persistence
//! - Nutrition plan output
//! - Session logging and statistics
//! - Config validation

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to create a test data directory with an empty config file
fn setup_test_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("config.toml"), "").expect("Failed to write config");
    dir
}

/// Helper to get the CLI binary pointed at an isolated data directory
fn cli(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fitplan"));
    cmd.arg("--data-dir")
        .arg(dir)
        .arg("--config")
        .arg(dir.join("config.toml"));
    cmd
}

fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().expect("Failed to run fitplan");
    assert!(output.status.success(), "fitplan failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

#[test]
fn test_cli_help() {
    Command::new(assert_cmd::cargo::cargo_bin!("fitplan"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nutrition plans and training statistics"))
        .stdout(predicate::str::contains("stats"))
        .stdout(predicate::str::contains("export").not());
}

#[test]
fn test_plan_for_default_profile() {
    let temp_dir = setup_test_dir();

    let plan = json_output(cli(temp_dir.path()).args(["plan", "--json"]));

    assert_eq!(plan["bmr"], 1719);
    assert_eq!(plan["tdee"], 2364);
    assert_eq!(plan["calories"], 2364);
    assert_eq!(plan["protein"], 150);
    assert_eq!(plan["fat"], 66);
    assert_eq!(plan["carbs"], 293);
    assert_eq!(plan["goal"], "MAINTENANCE");
    assert_eq!(plan["meals"].as_array().unwrap().len(), 5);
    assert_eq!(plan["tips"].as_array().unwrap().len(), 7);
}

#[test]
fn test_profile_set_persists_and_changes_plan() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .args(["profile", "set", "--weight", "80", "--goal", "volume"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Profile saved"));

    assert!(temp_dir.path().join("profile.json").exists());

    let profile = json_output(cli(temp_dir.path()).args(["profile", "show", "--json"]));
    assert_eq!(profile["weight"], 80.0);
    assert_eq!(profile["goal"], "VOLUME");

    let plan = json_output(cli(temp_dir.path()).args(["plan", "--json"]));
    assert_eq!(plan["goal"], "VOLUME");
    assert_eq!(plan["protein"], 176); // 80 * 2.2
    assert_eq!(plan["meals"][0]["time"], "08:00");
}

#[test]
fn test_profile_set_rejects_out_of_range_weight() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .args(["profile", "set", "--weight", "5"])
        .assert()
        .failure();

    assert!(!temp_dir.path().join("profile.json").exists());
}

#[test]
fn test_unknown_goal_falls_back_to_maintenance() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .args(["profile", "set", "--goal", "bulk"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown goal: bulk"));

    let profile = json_output(cli(temp_dir.path()).args(["profile", "show", "--json"]));
    assert_eq!(profile["goal"], "MAINTENANCE");
}

#[test]
fn test_foods_lists_reference_table() {
    let temp_dir = setup_test_dir();

    let foods = json_output(cli(temp_dir.path()).args(["foods", "--json"]));
    let foods = foods.as_array().unwrap();
    assert_eq!(foods.len(), 30);
    assert!(foods[0]["per100g"]["calories"].is_number());
}

#[test]
fn test_exercises_filter_by_muscle_group() {
    let temp_dir = setup_test_dir();

    let exercises =
        json_output(cli(temp_dir.path()).args(["exercises", "--muscle", "legs", "--json"]));
    let exercises = exercises.as_array().unwrap();
    assert!(!exercises.is_empty());
    assert!(exercises.iter().all(|e| e["muscle_group"] == "LEGS"));

    cli(temp_dir.path())
        .args(["exercises", "--muscle", "neck"])
        .assert()
        .failure();
}

#[test]
fn test_log_then_stats() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .args([
            "log",
            "--duration",
            "45",
            "--rpe",
            "8",
            "--set",
            "bench_press:3x10@20",
            "--set",
            "squat:4x8@0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Session logged!"))
        .stdout(predicate::str::contains("Volume: 600"));

    let lines = fs::read_to_string(temp_dir.path().join("sessions.jsonl")).unwrap();
    assert_eq!(lines.lines().count(), 1);

    let stats = json_output(cli(temp_dir.path()).args(["stats", "--json"]));
    assert_eq!(stats["totalSessions"], 1);
    assert_eq!(stats["sessionsThisWeek"], 1);
    assert_eq!(stats["totalVolume"], 600.0);
    assert_eq!(stats["totalDuration"], 45);
    assert_eq!(stats["avgRpe"], 8.0);
    assert_eq!(stats["sessionsPerWeek"], 0.3);
    assert_eq!(stats["weeklyVolume"].as_object().unwrap().len(), 1);
}

#[test]
fn test_incomplete_sessions_excluded_from_stats() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .args(["log", "--incomplete", "--set", "plank:3x1"])
        .assert()
        .success();

    let stats = json_output(cli(temp_dir.path()).args(["stats", "--json"]));
    assert_eq!(stats["totalSessions"], 0);
    assert!(stats["avgRpe"].is_null());
    assert!(stats["mostWorkedMuscle"].is_null());
}

#[test]
fn test_log_unknown_exercise_fails() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .args(["log", "--set", "moonwalk:3x10"])
        .assert()
        .failure();

    assert!(!temp_dir.path().join("sessions.jsonl").exists());
}

#[test]
fn test_log_rejects_non_finite_weight() {
    let temp_dir = setup_test_dir();

    for set in ["squat:3x10@inf", "squat:3x10@NaN", "squat:3x10@1e308"] {
        cli(temp_dir.path())
            .args(["log", "--set", set])
            .assert()
            .failure()
            .stdout(predicate::str::contains("Session logged").not());
    }

    assert!(!temp_dir.path().join("sessions.jsonl").exists());
}

#[test]
fn test_log_rejects_out_of_range_rpe() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .args(["log", "--rpe", "11"])
        .assert()
        .failure();
}

#[test]
fn test_empty_history_stats() {
    let temp_dir = setup_test_dir();

    let stats = json_output(cli(temp_dir.path()).args(["stats", "--json"]));
    assert_eq!(stats["totalSessions"], 0);
    assert_eq!(stats["totalVolume"], 0.0);
    assert_eq!(stats["sessionsPerWeek"], 0.0);
}

#[test]
fn test_dated_sessions_keyed_by_week_start() {
    let temp_dir = setup_test_dir();

    // Wednesday and Sunday of the week starting Monday 2024-03-11
    for date in ["2024-03-13", "2024-03-17T21:30:00Z"] {
        cli(temp_dir.path())
            .args(["log", "--date", date, "--set", "deadlift:5x5@100"])
            .assert()
            .success();
    }

    let stats = json_output(cli(temp_dir.path()).args(["stats", "--json"]));
    assert_eq!(stats["totalSessions"], 2);
    assert_eq!(stats["totalVolume"], 5000.0);
    assert_eq!(stats["weeklyVolume"]["2024-03-11"], 5000.0);
    assert_eq!(stats["weeklyVolume"].as_object().unwrap().len(), 1);
}

#[test]
fn test_invalid_config_is_reported() {
    let temp_dir = setup_test_dir();
    fs::write(
        temp_dir.path().join("config.toml"),
        "[stats]\nweekly_volume_weeks = 0\n",
    )
    .unwrap();

    cli(temp_dir.path())
        .args(["stats"])
        .assert()
        .failure();
}
