//! Parsing of user-facing date strings.
//!
//! Dates cross the boundary as `day/month/year`, where the month is either a
//! number or an English name or three-letter abbreviation, and the day may or
//! may not carry a leading zero: `4/July/2025`, `04/07/2025`, `28/feb/1900`.

use crate::error::{DaybookError, DaybookResult};

use super::serial::CalendarDate;

/// Parse a `day/month/year` string into a [`CalendarDate`].
///
/// Fails with a format error if the string does not split into three parts or
/// any part is not expressible as a day, month, or year.
pub fn parse_date(input: &str) -> DaybookResult<CalendarDate> {
    let parts: Vec<&str> = input.trim().split('/').collect();
    if parts.len() != 3 {
        return Err(DaybookError::Format(format!(
            "'{input}' is not in day/month/year form"
        )));
    }

    let day: u32 = parts[0]
        .trim()
        .parse()
        .map_err(|_| DaybookError::Format(format!("'{}' is not a valid day", parts[0])))?;
    let month = month_number(parts[1].trim())?;
    let year: i32 = parts[2]
        .trim()
        .parse()
        .map_err(|_| DaybookError::Format(format!("'{}' is not a valid year", parts[2])))?;

    CalendarDate::new(year, month, day)
}

/// Resolve a month written as a number, an English name, or a three-letter
/// abbreviation.
fn month_number(month: &str) -> DaybookResult<u32> {
    let resolved = match month.to_lowercase().as_str() {
        "january" | "jan" => 1,
        "february" | "feb" => 2,
        "march" | "mar" => 3,
        "april" | "apr" => 4,
        "may" => 5,
        "june" | "jun" => 6,
        "july" | "jul" => 7,
        "august" | "aug" => 8,
        "september" | "sep" => 9,
        "october" | "oct" => 10,
        "november" | "nov" => 11,
        "december" | "dec" => 12,
        other => other
            .parse::<u32>()
            .map_err(|_| DaybookError::Format(format!("'{month}' is not a valid month")))?,
    };

    if !(1..=12).contains(&resolved) {
        return Err(DaybookError::Format(format!(
            "'{month}' is not a valid month"
        )));
    }
    Ok(resolved)
}
