//! Locating the table row that belongs to a given day.
//!
//! Every employee table keys its rows by the date in cell 0, stored either as
//! a 1900-system serial number or, in older rows, as a `d/m/yyyy` text cell.
//! The locator normalizes both forms to a serial and compares exactly.

use crate::types::{CellValue, TableRow};

use super::date_parse::parse_date;
use super::serial::{to_serial, CalendarDate, SpreadsheetSerial};

/// Find the remote index of the first row whose date cell matches `target`.
///
/// Rows are scanned once, in the order delivered by the remote source. Rows
/// whose first cell is missing, blank, boolean, or unparseable text are
/// skipped rather than treated as errors. `None` means the date is simply not
/// in the table, which is a normal outcome.
pub fn find_row_index(target: &CalendarDate, rows: &[TableRow]) -> Option<usize> {
    let wanted = to_serial(target);
    rows.iter()
        .find(|row| row_serial(row).is_some_and(|serial| serial == wanted))
        .map(|row| row.index)
}

/// Candidate serial for a row, read from its date cell.
fn row_serial(row: &TableRow) -> Option<SpreadsheetSerial> {
    match row.first_cell()? {
        CellValue::Number(n) => Some(SpreadsheetSerial(n.trunc() as i64)),
        CellValue::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            parse_date(trimmed).ok().map(|date| to_serial(&date))
        }
        CellValue::Bool(_) | CellValue::Blank => None,
    }
}
