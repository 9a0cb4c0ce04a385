//! The daily data entry: one row's worth of sales metrics for one employee.
//!
//! Entries live in YAML files on the way in (`submit`) and out (`export`).
//! On the wire they become one workbook table row: cell 0 is the date as a
//! 1900-system serial, cells 1..=20 the metric values as entered.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::date_parse::parse_date;
use crate::core::serial::{to_serial, CalendarDate, DATE_NUMBER_FORMAT};
use crate::error::{DaybookError, DaybookResult};
use crate::types::CellValue;

/// Number of metric cells following the date cell.
pub const METRIC_COUNT: usize = 20;

/// One day's figures, in the column order of the workbook tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataEntry {
    /// Employee display name. Optional in the file; `--employee` overrides.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub employee: String,
    /// Date in `day/month/year` form, month name or number.
    pub date: String,

    #[serde(default)]
    pub portin: String,
    #[serde(default)]
    pub p2p: String,
    #[serde(default)]
    pub new_fixed_adsl: String,
    #[serde(default)]
    pub new_fixed_vdsl: String,
    #[serde(default)]
    pub new_fixed_ftth: String,
    #[serde(default)]
    pub fwa: String,
    #[serde(default)]
    pub wireless_home: String,
    #[serde(default)]
    pub onenet: String,
    #[serde(default)]
    pub fixed_migration_ftth: String,
    #[serde(default)]
    pub ec2post: String,
    #[serde(default)]
    pub post2post: String,
    #[serde(default)]
    pub tv_new: String,
    #[serde(default)]
    pub tv_migration: String,
    #[serde(default)]
    pub vdsl_migration: String,
    #[serde(default)]
    pub phone_renewal: String,
    #[serde(default)]
    pub fixed_renewal: String,
    #[serde(default)]
    pub total_etopup: String,
    #[serde(default)]
    pub total_payments: String,
    #[serde(default)]
    pub mobile_deals: String,
    #[serde(default)]
    pub fixed_deals: String,
}

impl DataEntry {
    /// Load an entry from a YAML file.
    pub fn load(path: &Path) -> DaybookResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let entry: DataEntry = serde_yaml::from_str(&content)?;
        if entry.date.trim().is_empty() {
            return Err(DaybookError::Format(
                "entry file has no date".to_string(),
            ));
        }
        Ok(entry)
    }

    /// The entry's date, parsed.
    pub fn calendar_date(&self) -> DaybookResult<CalendarDate> {
        parse_date(&self.date)
    }

    /// Metric fields in table column order (cells 1..=20).
    pub fn metrics(&self) -> [&str; METRIC_COUNT] {
        [
            &self.portin,
            &self.p2p,
            &self.new_fixed_adsl,
            &self.new_fixed_vdsl,
            &self.new_fixed_ftth,
            &self.fwa,
            &self.wireless_home,
            &self.onenet,
            &self.fixed_migration_ftth,
            &self.ec2post,
            &self.post2post,
            &self.tv_new,
            &self.tv_migration,
            &self.vdsl_migration,
            &self.phone_renewal,
            &self.fixed_renewal,
            &self.total_etopup,
            &self.total_payments,
            &self.mobile_deals,
            &self.fixed_deals,
        ]
    }

    /// Build the `values` row for an update payload: the date as a serial
    /// number literal, then the metric strings.
    pub fn to_row_values(&self) -> DaybookResult<Vec<serde_json::Value>> {
        let serial = to_serial(&self.calendar_date()?);
        let mut row = Vec::with_capacity(METRIC_COUNT + 1);
        row.push(serde_json::Value::from(serial.0));
        for metric in self.metrics() {
            row.push(serde_json::Value::from(metric));
        }
        Ok(row)
    }

    /// The `numberFormat` row paired with [`to_row_values`]: the date cell
    /// keeps its display format, everything else stays General.
    pub fn number_formats() -> Vec<&'static str> {
        let mut formats = Vec::with_capacity(METRIC_COUNT + 1);
        formats.push(DATE_NUMBER_FORMAT);
        formats.extend(std::iter::repeat("General").take(METRIC_COUNT));
        formats
    }

    /// Rebuild an entry from a fetched row's cells.
    ///
    /// Cell 0 (the date) is not read back; the caller already knows which
    /// date it asked for. Missing trailing cells become empty strings.
    pub fn from_row_values(cells: &[CellValue], employee: &str, date: &str) -> Self {
        let cell = |index: usize| -> String {
            cells
                .get(index)
                .map(CellValue::display_string)
                .unwrap_or_default()
        };

        DataEntry {
            employee: employee.to_string(),
            date: date.to_string(),
            portin: cell(1),
            p2p: cell(2),
            new_fixed_adsl: cell(3),
            new_fixed_vdsl: cell(4),
            new_fixed_ftth: cell(5),
            fwa: cell(6),
            wireless_home: cell(7),
            onenet: cell(8),
            fixed_migration_ftth: cell(9),
            ec2post: cell(10),
            post2post: cell(11),
            tv_new: cell(12),
            tv_migration: cell(13),
            vdsl_migration: cell(14),
            phone_renewal: cell(15),
            fixed_renewal: cell(16),
            total_etopup: cell(17),
            total_payments: cell(18),
            mobile_deals: cell(19),
            fixed_deals: cell(20),
        }
    }
}
