mod common;
use common::{setup_test_config, temp_out, ttw, ttw_isolated};
use predicates::str::contains;
use std::fs;

#[test]
fn test_export_csv() {
    let out = temp_out("export_csv", "csv");

    ttw_isolated("export_csv")
        .args(["export", "--format", "csv", "--file", &out, "08:00", "12:00", "12:30", "17:00"])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("range,minutes,duration,hours"));
    assert!(content.contains("08:00 - 12:00,240,04:00,4.00"));
    assert!(content.contains("Total,495,08:15,8.25"));
}

#[test]
fn test_export_json() {
    let out = temp_out("export_json", "json");

    ttw_isolated("export_json")
        .args(["export", "--format", "json", "--file", &out, "09:00", "17:00"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let v: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(v["effective_minutes"], 435);
    assert_eq!(v["rows"][0]["duration"], "08:00");
}

#[test]
fn test_export_text_has_no_colors() {
    let out = temp_out("export_text", "txt");

    ttw_isolated("export_text")
        .args(["export", "--format", "text", "--file", &out, "09:00", "17:00"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported text");
    assert!(content.contains("Total"));
    assert!(!content.contains('\x1b'));
}

#[test]
fn test_export_force_overwrites() {
    let out = temp_out("export_force", "csv");
    fs::write(&out, "old").expect("seed file");

    ttw_isolated("export_force")
        .args(["export", "--file", &out, "--force", "09:00", "10:00"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("09:00 - 10:00"));
}

#[test]
fn test_export_declined_overwrite_keeps_file() {
    let out = temp_out("export_declined", "csv");
    fs::write(&out, "old").expect("seed file");

    ttw_isolated("export_declined")
        .args(["export", "--file", &out, "09:00", "10:00"])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));

    assert_eq!(fs::read_to_string(&out).expect("read file"), "old");
}

#[test]
fn test_export_invalid_input_writes_nothing() {
    let out = temp_out("export_invalid", "csv");

    ttw_isolated("export_invalid")
        .args(["export", "--file", &out, "09:00"])
        .assert()
        .failure()
        .stderr(contains("Odd number of timestamps"));

    assert!(fs::metadata(&out).is_err());
}

#[test]
fn test_config_init_and_print() {
    let cfg = setup_test_config("config_init_print");

    ttw()
        .args(["--config", &cfg, "config", "--init"])
        .assert()
        .success()
        .stdout(contains("Config file"));

    ttw()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("morning_break"))
        .stdout(contains("lunch_break"))
        .stdout(contains("end_partial: true"));
}
