use serde::{Deserialize, Serialize};

//==============================================================================
// Remote table rows
//==============================================================================

/// One cell of a workbook table row, as delivered by the Graph API.
///
/// Graph serializes cells as plain JSON scalars; empty cells arrive as `null`.
/// Variant order matters for untagged deserialization: numbers and booleans
/// must be tried before text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Bool(bool),
    Text(String),
    Blank,
}

impl CellValue {
    /// Render the cell the way the original sheet shows it: numbers without
    /// trailing zeros, blanks as the empty string.
    pub fn display_string(&self) -> String {
        match self {
            CellValue::Number(n) => format_number(*n),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Text(s) => s.clone(),
            CellValue::Blank => String::new(),
        }
    }
}

/// Format a number for display, removing unnecessary decimal places
pub(crate) fn format_number(n: f64) -> String {
    let rounded = (n * 1e6).round() / 1e6;
    format!("{:.6}", rounded)
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// One row of a remote workbook table.
///
/// `index` is the row's position within the table as reported by Graph, and is
/// the handle later reads and updates address the row by. `values` is a 2-D
/// array holding exactly one row, mirroring the wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub index: usize,
    pub values: Vec<Vec<CellValue>>,
}

impl TableRow {
    pub fn new(index: usize, cells: Vec<CellValue>) -> Self {
        Self {
            index,
            values: vec![cells],
        }
    }

    /// The first cell of the row, if present. Cell 0 of every table in the
    /// workbook is the date column.
    pub fn first_cell(&self) -> Option<&CellValue> {
        self.values.first().and_then(|row| row.first())
    }

    /// All cells of the row.
    pub fn cells(&self) -> &[CellValue] {
        self.values.first().map(Vec::as_slice).unwrap_or(&[])
    }
}

//==============================================================================
// Identity
//==============================================================================

/// Profile of the signed-in user, from `GET /me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub user_principal_name: String,
}

/// One roster member: a person with their own table in the shared workbook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Name shown to users and accepted by `--employee`.
    pub display_name: String,
    /// Account name used to match the Graph profile.
    #[serde(default)]
    pub user_name: String,
    /// Name of this employee's table in the workbook.
    pub table: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_value_deserializes_all_shapes() {
        let cells: Vec<CellValue> = serde_json::from_str(r#"[45842, "total", true, null]"#).unwrap();
        assert_eq!(
            cells,
            vec![
                CellValue::Number(45842.0),
                CellValue::Text("total".to_string()),
                CellValue::Bool(true),
                CellValue::Blank,
            ]
        );
    }

    #[test]
    fn blank_serializes_as_null() {
        let json = serde_json::to_string(&CellValue::Blank).unwrap();
        assert_eq!(json, "null");
    }

    #[test]
    fn display_string_trims_float_noise() {
        assert_eq!(CellValue::Number(5.0).display_string(), "5");
        assert_eq!(CellValue::Number(2.5).display_string(), "2.5");
        assert_eq!(CellValue::Blank.display_string(), "");
    }

    #[test]
    fn first_cell_of_empty_row_is_none() {
        let row = TableRow {
            index: 0,
            values: vec![],
        };
        assert!(row.first_cell().is_none());
        assert!(row.cells().is_empty());
    }
}
