//! Roster configuration tests

use std::io::Write;

use daybook::error::DaybookError;
use daybook::roster::Roster;
use daybook::types::UserInfo;
use tempfile::NamedTempFile;

const SAMPLE: &str = r#"
workbook:
  site_id: contoso.sharepoint.com,5a9063f8,ac4fadb3
  drive_id: b!drive
  file_id: 01FILE
employees:
  - display_name: Katerina G
    user_name: katerina
    table: KATERINA
  - display_name: Eirini M
    user_name: eirinim
    table: EIRINI_M
  - display_name: Anastasia P
    table: ANASTASIA
"#;

fn write_roster(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

// ═══════════════════════════════════════════════════════════════════════════
// LOADING AND VALIDATION
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_load_sample_roster() {
    let file = write_roster(SAMPLE);
    let roster = Roster::load(file.path()).unwrap();
    assert_eq!(roster.employees.len(), 3);
    assert_eq!(roster.workbook.file_id, "01FILE");
    // user_name is optional; it only feeds identity matching
    assert_eq!(roster.employees[2].user_name, "");
}

#[test]
fn test_load_missing_file_is_io_error() {
    let err = Roster::load(std::path::Path::new("no-such-roster.yaml")).unwrap_err();
    assert!(matches!(err, DaybookError::Io(_)));
}

#[test]
fn test_load_rejects_empty_employee_list() {
    let file = write_roster(
        "workbook:\n  site_id: s\n  drive_id: d\n  file_id: f\nemployees: []\n",
    );
    let err = Roster::load(file.path()).unwrap_err();
    assert!(matches!(err, DaybookError::Roster(_)));
}

#[test]
fn test_load_rejects_duplicate_tables() {
    let file = write_roster(
        r#"
workbook:
  site_id: s
  drive_id: d
  file_id: f
employees:
  - display_name: A
    table: SHARED
  - display_name: B
    table: SHARED
"#,
    );
    assert!(Roster::load(file.path()).is_err());
}

#[test]
fn test_load_rejects_duplicate_display_names() {
    // find() resolves names case-insensitively, so these two would both
    // answer to "katerina g"
    let file = write_roster(
        r#"
workbook:
  site_id: s
  drive_id: d
  file_id: f
employees:
  - display_name: Katerina G
    table: TABLE_A
  - display_name: KATERINA G
    table: TABLE_B
"#,
    );
    let err = Roster::load(file.path()).unwrap_err();
    assert!(matches!(err, DaybookError::Roster(_)));
}

#[test]
fn test_load_rejects_blank_table_name() {
    let file = write_roster(
        r#"
workbook:
  site_id: s
  drive_id: d
  file_id: f
employees:
  - display_name: A
    table: "  "
"#,
    );
    assert!(Roster::load(file.path()).is_err());
}

// ═══════════════════════════════════════════════════════════════════════════
// LOOKUP AND IDENTITY MATCHING
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_find_by_display_name_case_insensitive() {
    let file = write_roster(SAMPLE);
    let roster = Roster::load(file.path()).unwrap();
    assert_eq!(roster.find("KATERINA G").unwrap().table, "KATERINA");
    assert!(matches!(
        roster.find("nobody"),
        Err(DaybookError::UnknownEmployee(_))
    ));
}

#[test]
fn test_match_user_by_account_or_display_name() {
    let file = write_roster(SAMPLE);
    let roster = Roster::load(file.path()).unwrap();

    let by_account = UserInfo {
        display_name: "eirinim".to_string(),
        user_principal_name: "eirinim@contoso.com".to_string(),
    };
    assert_eq!(roster.match_user(&by_account).unwrap().table, "EIRINI_M");

    let by_display = UserInfo {
        display_name: "anastasia p".to_string(),
        user_principal_name: String::new(),
    };
    assert_eq!(roster.match_user(&by_display).unwrap().table, "ANASTASIA");

    let stranger = UserInfo {
        display_name: "Visitor".to_string(),
        user_principal_name: String::new(),
    };
    assert!(roster.match_user(&stranger).is_none());
}
