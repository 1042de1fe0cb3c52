use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use studykit_testing::{TestWorld, assertions};
use studykit_types::daily::FORTUNES;

#[test]
fn test_help_lists_every_command() {
    let mut cmd = cargo_bin_cmd!("studykit");
    cmd.arg("--help").assert().success().stdout(
        predicate::str::contains("profile")
            .and(predicate::str::contains("schedule"))
            .and(predicate::str::contains("checklist"))
            .and(predicate::str::contains("dist")),
    );
}

#[test]
fn test_no_command_shows_guidance() {
    let world = TestWorld::new();
    let result = world.run(&[]).unwrap();

    assert!(result.success());
    assert!(result.stdout().contains("Default type: ENFP"));
    assert!(result.stdout().contains("studykit profile ENFP"));
}

#[test]
fn test_types_check_validates_catalog() {
    let world = TestWorld::new();
    let json = world.run_json(&["types", "--check"]).unwrap();

    assert_eq!(json["content"]["types"].as_array().unwrap().len(), 16);
    assert_eq!(json["content"]["catalog_valid"], true);
    assertions::assert_badge_level(&json, "success").unwrap();
}

#[test]
fn test_profile_includes_three_tips() {
    let world = TestWorld::new();
    let json = world.run_json(&["profile", "intj"]).unwrap();

    assert_eq!(json["content"]["code"], "INTJ");
    let letters: Vec<&str> = json["content"]["tips"]
        .as_array()
        .unwrap()
        .iter()
        .map(|tip| tip["letter"].as_str().unwrap())
        .collect();
    assert_eq!(letters, vec!["N", "T", "J"]);
}

#[test]
fn test_profile_all_tips_lists_every_preference() {
    let world = TestWorld::new();
    let json = world.run_json(&["profile", "intj", "--all-tips"]).unwrap();

    let letters: Vec<&str> = json["content"]["tips"]
        .as_array()
        .unwrap()
        .iter()
        .map(|tip| tip["letter"].as_str().unwrap())
        .collect();
    assert_eq!(letters, vec!["S", "N", "T", "F", "J", "P"]);
}

#[test]
fn test_dist_help_describes_every_flag() {
    let mut cmd = cargo_bin_cmd!("studykit");
    cmd.args(["dist", "export", "--help"]).assert().success().stdout(
        predicate::str::contains("CSV file to write")
            .and(predicate::str::contains("byte-order mark")),
    );

    let mut cmd = cargo_bin_cmd!("studykit");
    cmd.args(["dist", "show", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("byte-order mark"));
}

#[test]
fn test_profile_defaults_to_configured_type() {
    let world = TestWorld::new().with_config("default_type = \"ISTP\"\n");
    let json = world.run_json(&["profile"]).unwrap();

    assert_eq!(json["content"]["code"], "ISTP");
}

#[test]
fn test_profile_rejects_unknown_code() {
    let world = TestWorld::new();
    let result = world.run(&["profile", "ABCD"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("ABCD"));
}

#[test]
fn test_schedule_default_plan() {
    let world = TestWorld::new();
    let json = world
        .run_json(&["schedule", "--focus", "40", "--break", "10", "--hours", "3", "--start", "09:00"])
        .unwrap();

    assertions::assert_session_count(&json, 3).unwrap();
    let sessions = json["content"]["sessions"].as_array().unwrap();
    assert_eq!(sessions[0]["focus_start"], "09:00");
    assert_eq!(sessions[0]["break"], "10 minutes");
    assert_eq!(sessions[2]["focus_start"], "10:40");
    assert_eq!(sessions[2]["focus_end"], "11:20");
}

#[test]
fn test_schedule_accepts_full_start_datetime() {
    let world = TestWorld::new();
    let json = world
        .run_json(&["schedule", "--hours", "2", "--start", "2025-05-01T23:30"])
        .unwrap();

    assert_eq!(json["content"]["start"], "2025-05-01 23:30");
    let sessions = json["content"]["sessions"].as_array().unwrap();
    assert_eq!(sessions[1]["focus_start"], "00:20");
}

#[test]
fn test_schedule_that_fits_nothing_warns() {
    let world = TestWorld::new();
    let json = world
        .run_json(&["schedule", "--focus", "60", "--break", "15", "--hours", "1"])
        .unwrap();

    assertions::assert_session_count(&json, 0).unwrap();
    assertions::assert_badge_level(&json, "warning").unwrap();
}

#[test]
fn test_schedule_rejects_out_of_bounds_focus() {
    let world = TestWorld::new();
    let result = world.run(&["schedule", "--focus", "90"]).unwrap();

    assert!(!result.success());
    assert!(
        result
            .stderr()
            .contains("--focus must be between 20 and 60 (got 90)")
    );
}

#[test]
fn test_schedule_rejects_off_step_focus() {
    let world = TestWorld::new();
    let result = world.run(&["schedule", "--focus", "33"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("multiple of 5"));
}

#[test]
fn test_schedule_bounds_come_from_config() {
    let world = TestWorld::new().with_config("[bounds.focus]\nmin = 10\nmax = 90\nstep = 5\n");
    let json = world
        .run_json(&["schedule", "--focus", "90", "--hours", "2", "--start", "08:00"])
        .unwrap();

    assertions::assert_session_count(&json, 1).unwrap();
}

#[test]
fn test_schedule_rejects_bad_start() {
    let world = TestWorld::new();
    let result = world.run(&["schedule", "--start", "noon"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("Invalid --start 'noon'"));
}

#[test]
fn test_schedule_csv_with_bom() {
    let world = TestWorld::new();
    let result = world
        .run(&[
            "schedule", "--focus", "25", "--break", "5", "--hours", "1", "--start", "09:00",
            "--output", "out/plan.csv", "--bom",
        ])
        .unwrap();
    assert!(result.success(), "{}", result.stderr());

    let bytes = std::fs::read(world.path("out/plan.csv")).unwrap();
    assert!(bytes.starts_with(b"\xEF\xBB\xBF"));
    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    assert_eq!(
        text,
        "session,focus_start,focus_end,break\n1,09:00,09:25,5 minutes\n2,09:30,09:55,5 minutes\n"
    );
    assert!(result.stdout().contains("Saved to out/plan.csv"));
}

#[test]
fn test_bom_requires_output() {
    let world = TestWorld::new();
    let result = world.run(&["schedule", "--bom"]).unwrap();

    assert!(!result.success());
}

#[test]
fn test_fortune_draws_one_message() {
    let world = TestWorld::new();
    let json = world.run_json(&["fortune"]).unwrap();

    let fortune = json["content"]["fortune"].as_str().unwrap();
    assert!(FORTUNES.contains(&fortune), "unexpected fortune: {}", fortune);
}

#[test]
fn test_checklist_counts_done_items() {
    let world = TestWorld::new();
    let json = world.run_json(&["checklist", "--done", "1,3"]).unwrap();

    assert_eq!(json["content"]["completed"], 2);
    assert_eq!(json["content"]["total"], 4);
    assert_eq!(json["content"]["items"][0]["done"], true);
    assert_eq!(json["content"]["items"][1]["done"], false);
    assertions::assert_badge_level(&json, "info").unwrap();
}

#[test]
fn test_checklist_all_done_congratulates() {
    let world = TestWorld::new();
    let result = world.run(&["checklist", "--done", "4,3,2,1"]).unwrap();

    assert!(result.success());
    assert!(result.stdout().contains("All done!"));
    assert!(result.stdout().contains("4/4 done"));
}

#[test]
fn test_checklist_rejects_unknown_item() {
    let world = TestWorld::new();
    let result = world.run(&["checklist", "--done", "5"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("Checklist item 5 does not exist"));
}
