//! Date serial conversion and row location, the synchronous heart of the crate

pub mod date_parse;
pub mod locator;
pub mod serial;

pub use date_parse::parse_date;
pub use locator::find_row_index;
pub use serial::{from_serial, to_serial, CalendarDate, SpreadsheetSerial, DATE_NUMBER_FORMAT};
