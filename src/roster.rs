//! The employee roster: external configuration mapping people to workbook
//! tables.
//!
//! A roster file is YAML:
//!
//! ```yaml
//! workbook:
//!   site_id: contoso.sharepoint.com,5a90...,ac4f...
//!   drive_id: b!-GOQ...
//!   file_id: 01HUQKBF...
//! employees:
//!   - display_name: Katerina G
//!     user_name: katerina
//!     table: KATERINA
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DaybookError, DaybookResult};
use crate::types::{Employee, UserInfo};

/// Coordinates of the shared workbook in the remote drive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkbookRef {
    pub site_id: String,
    pub drive_id: String,
    pub file_id: String,
}

/// The roster: workbook coordinates plus the list of employees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub workbook: WorkbookRef,
    pub employees: Vec<Employee>,
}

impl Roster {
    /// Load and validate a roster file.
    pub fn load(path: &Path) -> DaybookResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let roster: Roster = serde_yaml::from_str(&content)?;
        roster.validate()?;
        Ok(roster)
    }

    fn validate(&self) -> DaybookResult<()> {
        if self.employees.is_empty() {
            return Err(DaybookError::Roster(
                "roster has no employees".to_string(),
            ));
        }
        for employee in &self.employees {
            if employee.table.trim().is_empty() {
                return Err(DaybookError::Roster(format!(
                    "employee '{}' has no table name",
                    employee.display_name
                )));
            }
        }
        let mut tables: Vec<&str> = self.employees.iter().map(|e| e.table.as_str()).collect();
        tables.sort_unstable();
        tables.dedup();
        if tables.len() != self.employees.len() {
            return Err(DaybookError::Roster(
                "two employees share the same table".to_string(),
            ));
        }
        // Display names resolve --employee case-insensitively, so they must
        // be unique under the same comparison
        let mut names: Vec<String> = self
            .employees
            .iter()
            .map(|e| e.display_name.to_lowercase())
            .collect();
        names.sort_unstable();
        names.dedup();
        if names.len() != self.employees.len() {
            return Err(DaybookError::Roster(
                "two employees share the same display name".to_string(),
            ));
        }
        Ok(())
    }

    /// Look an employee up by display name, case-insensitively.
    pub fn find(&self, display_name: &str) -> DaybookResult<&Employee> {
        self.employees
            .iter()
            .find(|e| e.display_name.eq_ignore_ascii_case(display_name))
            .ok_or_else(|| DaybookError::UnknownEmployee(display_name.to_string()))
    }

    /// Match a signed-in Graph profile to a roster member.
    ///
    /// The profile's display name is compared against both the account name
    /// and the display name of each employee, case-insensitively.
    pub fn match_user(&self, user: &UserInfo) -> Option<&Employee> {
        let name = user.display_name.as_str();
        if name.is_empty() {
            return None;
        }
        self.employees.iter().find(|e| {
            e.user_name.eq_ignore_ascii_case(name) || e.display_name.eq_ignore_ascii_case(name)
        })
    }
}
