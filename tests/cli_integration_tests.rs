//! CLI integration tests (binary invocation, network-free commands only)

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn daybook() -> Command {
    Command::cargo_bin("daybook").unwrap()
}

// ═══════════════════════════════════════════════════════════════════════════
// HELP AND VERSION
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_help_lists_commands() {
    daybook()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("submit"))
        .stdout(predicate::str::contains("serial"));
}

#[test]
fn test_version_flag() {
    daybook()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("daybook"));
}

// ═══════════════════════════════════════════════════════════════════════════
// SERIAL COMMAND
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_serial_from_date() {
    daybook()
        .args(["serial", "4/July/2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("45842"));
}

#[test]
fn test_serial_epoch() {
    daybook()
        .args(["serial", "1/1/1900"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn test_serial_inverse() {
    daybook()
        .args(["serial", "--from", "45842"])
        .assert()
        .success()
        .stdout("4/7/2025\n");
}

#[test]
fn test_serial_rejects_phantom_leap_day() {
    daybook()
        .args(["serial", "--from", "60"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("phantom"));
}

#[test]
fn test_serial_rejects_garbage_date() {
    daybook()
        .args(["serial", "not-a-date"])
        .assert()
        .failure();
}

#[test]
fn test_serial_needs_exactly_one_input() {
    daybook().arg("serial").assert().failure();
}

// ═══════════════════════════════════════════════════════════════════════════
// EMPLOYEES COMMAND
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_employees_lists_roster() {
    let mut roster = NamedTempFile::new().unwrap();
    roster
        .write_all(
            br#"
workbook:
  site_id: s
  drive_id: d
  file_id: f
employees:
  - display_name: Katerina G
    user_name: katerina
    table: KATERINA
  - display_name: Eirini M
    table: EIRINI_M
"#,
        )
        .unwrap();

    daybook()
        .args(["employees", "--roster"])
        .arg(roster.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Katerina G"))
        .stdout(predicate::str::contains("EIRINI_M"))
        .stdout(predicate::str::contains("2 employees"));
}

#[test]
fn test_employees_missing_roster_fails() {
    daybook()
        .args(["employees", "--roster", "no-such-file.yaml"])
        .assert()
        .failure();
}
