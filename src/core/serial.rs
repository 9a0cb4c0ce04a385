//! Excel 1900-epoch serial date conversion.
//!
//! The workbook stores its date column as integer serials in the legacy 1900
//! date system: 1900-01-01 is serial 1, and the format inherits Lotus 1-2-3's
//! phantom 1900-02-29 (serial 60), so every real date after 1900-02-28 is
//! shifted up by one.

use chrono::NaiveDate;

use crate::error::{DaybookError, DaybookResult};

/// Number format applied to the date cell when writing a row.
pub const DATE_NUMBER_FORMAT: &str = "dd/mm/yyyy";

/// The reference date serial numbers are counted from.
const EPOCH: (i32, u32, u32) = (1900, 1, 1);

/// Serial of the phantom 1900-02-29. Never produced by `to_serial`; rejected
/// by `from_serial`.
const PHANTOM_LEAP_DAY: i64 = 60;

/// A validated calendar date in the proleptic Gregorian calendar.
///
/// Field order gives derived ordering chronological semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Construct a date, rejecting triples that do not exist in the calendar.
    pub fn new(year: i32, month: u32, day: u32) -> DaybookResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            DaybookError::Format(format!("{day}/{month}/{year} is not a valid date"))
        })?;
        Ok(Self { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    fn as_naive(&self) -> NaiveDate {
        // Valid by construction
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).unwrap()
    }

    /// The next calendar day, or `None` at the end of the representable
    /// calendar.
    pub fn succ(&self) -> Option<Self> {
        self.as_naive().succ_opt().map(Self::from)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(d: NaiveDate) -> Self {
        use chrono::Datelike;
        Self {
            year: d.year(),
            month: d.month(),
            day: d.day(),
        }
    }
}

impl std::fmt::Display for CalendarDate {
    /// Numeric `d/m/yyyy`, the textual form the workbook stores dates in.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.day, self.month, self.year)
    }
}

/// A date expressed as days since the 1900 epoch, Excel conventions included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpreadsheetSerial(pub i64);

impl std::fmt::Display for SpreadsheetSerial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Convert a calendar date to its 1900-system serial.
///
/// The epoch date itself is serial 1, and dates strictly after 1900-02-28 get
/// one extra day to account for the phantom 1900-02-29 the format believes in.
/// Dates before the epoch are out of the supported range and produce
/// non-positive serials; callers reject them upstream.
pub fn to_serial(date: &CalendarDate) -> SpreadsheetSerial {
    let epoch = NaiveDate::from_ymd_opt(EPOCH.0, EPOCH.1, EPOCH.2).unwrap();
    let leap_bug_cutoff = NaiveDate::from_ymd_opt(1900, 2, 28).unwrap();
    let naive = date.as_naive();

    let days_difference = (naive - epoch).num_days();
    let mut serial = days_difference + 1;
    if naive > leap_bug_cutoff {
        serial += 1;
    }
    SpreadsheetSerial(serial)
}

/// Convert a 1900-system serial back to its calendar date.
///
/// Exact inverse of [`to_serial`] over the supported range. Serials below 1
/// and serial 60 (a date that never existed) are format errors.
pub fn from_serial(serial: SpreadsheetSerial) -> DaybookResult<CalendarDate> {
    let value = serial.0;
    if value < 1 {
        return Err(DaybookError::Format(format!(
            "serial {value} is before the 1900 epoch"
        )));
    }
    if value == PHANTOM_LEAP_DAY {
        return Err(DaybookError::Format(
            "serial 60 is the phantom 1900-02-29 and has no calendar date".to_string(),
        ));
    }

    let mut days = value - 1;
    if value > PHANTOM_LEAP_DAY {
        days -= 1;
    }

    let epoch = NaiveDate::from_ymd_opt(EPOCH.0, EPOCH.1, EPOCH.2).unwrap();
    let date = epoch
        .checked_add_signed(chrono::Duration::days(days))
        .ok_or_else(|| DaybookError::Format(format!("serial {value} is out of range")))?;
    Ok(CalendarDate::from(date))
}
