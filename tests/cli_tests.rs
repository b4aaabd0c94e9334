use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{dbot, sheet_rows, temp_dir};

const SCRIPT: &str = "\
# two drivers on the same day, one duplicate attempt
/start
hello
1234567890
Reza Ahmadi
2x engine oil
4521
LPO
another
1234567890
/reset
@99 hi
@99 0012345678
@99 Ali
@99 filter
@99 12
@99 staff
/generate
";

#[test]
fn test_chat_script_exports_per_user() {
    let dir = temp_dir("cli_chat_script");
    let cfg = dir.join("discountbot.conf");
    let out = dir.join("out");
    fs::create_dir_all(&dir).unwrap();

    dbot()
        .args(["--config", cfg.to_str().unwrap(), "--export-dir", out.to_str().unwrap()])
        .args(["--now", "2025-05-01 10:00", "chat", "--user", "7"])
        .write_stdin(SCRIPT)
        .assert()
        .success()
        .stdout(contains("Welcome to the Excel Generator Bot!"))
        .stdout(contains("This driver has purchased today."))
        .stdout(contains("Current entry discarded."))
        .stdout(contains("[LPO] [Staff] [none]"))
        .stdout(contains("7_excel_file.xlsx"));

    let user7 = out.join("7_excel_file.xlsx");
    assert_eq!(sheet_rows(&user7), 2);
    // user 99 never asked for an export
    assert!(!out.join("99_excel_file.xlsx").exists());
}

#[test]
fn test_chat_script_file_and_bad_user() {
    let dir = temp_dir("cli_chat_file");
    fs::create_dir_all(&dir).unwrap();
    let script = dir.join("script.txt");
    fs::write(&script, "@abc hello\n/generate\n/cancelDiscount\n").unwrap();

    dbot()
        .args(["--config", dir.join("none.conf").to_str().unwrap()])
        .args(["--export-dir", dir.join("out").to_str().unwrap()])
        .args(["chat", "--script", script.to_str().unwrap()])
        .assert()
        .success()
        .stderr(contains("Invalid user id: abc"))
        .stdout(contains("No data to generate Excel file."))
        .stdout(contains("No row to cancel."))
        .stdout(contains("2 message(s) handled"));
}

#[test]
fn test_init_and_print_config() {
    let dir = temp_dir("cli_init");
    let cfg = dir.join("conf").join("discountbot.conf");
    let out = dir.join("exports");

    dbot()
        .args(["--config", cfg.to_str().unwrap(), "--export-dir", out.to_str().unwrap(), "init"])
        .assert()
        .success()
        .stdout(contains("Config file"));

    assert!(cfg.exists());
    assert!(out.is_dir());

    dbot()
        .args(["--config", cfg.to_str().unwrap(), "config", "--print"])
        .assert()
        .success()
        .stdout(contains("highlight_color").and(contains("FFFF00")))
        .stdout(contains("excel_file.xlsx"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = temp_dir("cli_bad_config");
    fs::create_dir_all(&dir).unwrap();
    let cfg = dir.join("discountbot.conf");
    fs::write(&cfg, "highlight_color: yellow\n").unwrap();

    dbot()
        .args(["--config", cfg.to_str().unwrap(), "config", "--print"])
        .assert()
        .failure()
        .stderr(contains("highlight_color must be RRGGBB"));
}

#[test]
fn test_bad_now_flag_fails() {
    let dir = temp_dir("cli_bad_now");
    dbot()
        .args(["--config", dir.join("x.conf").to_str().unwrap()])
        .args(["--now", "yesterday", "chat"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(contains("Invalid date/time: yesterday"));
}

#[test]
fn test_init_test_mode_writes_nothing() {
    let dir = temp_dir("cli_init_test_mode");
    let cfg = dir.join("discountbot.conf");
    let out = dir.join("exports");

    dbot()
        .args(["--config", cfg.to_str().unwrap(), "--export-dir", out.to_str().unwrap()])
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("test mode"));

    assert!(!cfg.exists());
    assert!(!out.exists());
    assert!(!dir.exists());
}

#[test]
fn test_init_uses_export_dir_from_config() {
    let dir = temp_dir("cli_init_from_config");
    fs::create_dir_all(&dir).unwrap();
    let cfg = dir.join("discountbot.conf");
    let out = dir.join("from_config");
    fs::write(&cfg, format!("export_dir: {}\n", out.display())).unwrap();

    dbot()
        .args(["--config", cfg.to_str().unwrap(), "init"])
        .assert()
        .success()
        .stdout(contains("from_config"));

    assert!(out.is_dir());
}

#[test]
fn test_config_shows_effective_path() {
    let dir = temp_dir("cli_config_path");
    let cfg = dir.join("custom.conf");

    dbot()
        .args(["--config", cfg.to_str().unwrap(), "config"])
        .assert()
        .success()
        .stdout(contains(cfg.to_str().unwrap()));
}
