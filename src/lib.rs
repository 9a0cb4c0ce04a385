//! Daybook - per-day rows of a shared Excel workbook, over Microsoft Graph
//!
//! This library backs the `daybook` CLI: it maps a signed-in user to an
//! employee record from a roster file, converts calendar dates to the 1900
//! date-system serials the workbook stores, locates the table row belonging
//! to a date, and reads or rewrites that row through the Graph workbook API.
//!
//! # Example
//!
//! ```no_run
//! use daybook::core::{find_row_index, parse_date};
//! use daybook::types::TableRow;
//!
//! let target = parse_date("4/July/2025")?;
//! let rows: Vec<TableRow> = Vec::new(); // normally fetched via GraphClient
//!
//! match find_row_index(&target, &rows) {
//!     Some(index) => println!("row {index}"),
//!     None => println!("date not in table"),
//! }
//! # Ok::<(), daybook::error::DaybookError>(())
//! ```

pub mod cli;
pub mod core;
pub mod entry;
pub mod error;
pub mod graph;
pub mod roster;
pub mod types;

// Re-export commonly used types
pub use entry::DataEntry;
pub use error::{DaybookError, DaybookResult};
pub use roster::{Roster, WorkbookRef};
pub use types::{CellValue, Employee, TableRow, UserInfo};
