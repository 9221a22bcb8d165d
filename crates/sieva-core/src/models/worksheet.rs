//! Worksheet model
//!
//! The tabular view extracted from a spreadsheet-bearing media entity:
//! one header row plus ordered data rows. Worksheets are immutable after
//! creation; content validators read them and report findings elsewhere.

use serde::{Deserialize, Serialize};

/// One cell of a data row. Serializes as a bare JSON scalar:
/// string, number, or null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    /// Type a raw field the way the sheet readers upstream did: empty means
    /// null, numeric text means number, anything else stays text.
    pub fn from_field(field: &str) -> Self {
        if field.is_empty() {
            return Cell::Empty;
        }
        match field.parse::<f64>() {
            Ok(n) if n.is_finite() => Cell::Number(n),
            _ => Cell::Text(field.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Text view of the cell; `None` for empty cells.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Cell::Text(s) => Some(s.clone()),
            Cell::Number(n) => Some(n.to_string()),
            Cell::Empty => None,
        }
    }
}

/// Header + rows extracted from one sheet of one media entity.
#[derive(Debug, Clone)]
pub struct Worksheet {
    sheet_name: String,
    header_row: Vec<String>,
    data_rows: Vec<Vec<Cell>>,
}

impl Worksheet {
    pub fn new(
        sheet_name: impl Into<String>,
        header_row: Vec<String>,
        data_rows: Vec<Vec<Cell>>,
    ) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            header_row,
            data_rows,
        }
    }

    /// Reporting name: the sheet name, or the owning file's base name when
    /// the source format has only one implicit sheet.
    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    pub fn header_row(&self) -> &[String] {
        &self.header_row
    }

    pub fn data_rows(&self) -> &[Vec<Cell>] {
        &self.data_rows
    }

    pub fn is_empty(&self) -> bool {
        self.header_row.is_empty() && self.data_rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_typing() {
        assert_eq!(Cell::from_field(""), Cell::Empty);
        assert_eq!(Cell::from_field("42"), Cell::Number(42.0));
        assert_eq!(Cell::from_field("-3.5"), Cell::Number(-3.5));
        assert_eq!(
            Cell::from_field("hello"),
            Cell::Text("hello".to_string())
        );
        // Numeric-looking but non-finite text stays text
        assert_eq!(Cell::from_field("inf"), Cell::Text("inf".to_string()));
    }

    #[test]
    fn test_cell_serializes_as_bare_scalar() {
        assert_eq!(serde_json::to_string(&Cell::Empty).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Cell::Number(2.0)).unwrap(), "2.0");
        assert_eq!(
            serde_json::to_string(&Cell::Text("a".to_string())).unwrap(),
            "\"a\""
        );
    }

    #[test]
    fn test_worksheet_accessors() {
        let ws = Worksheet::new(
            "event",
            vec!["id".to_string(), "date".to_string()],
            vec![vec![Cell::Number(1.0), Cell::Text("2024-01-01".to_string())]],
        );
        assert_eq!(ws.sheet_name(), "event");
        assert_eq!(ws.header_row(), &["id".to_string(), "date".to_string()]);
        assert_eq!(ws.data_rows().len(), 1);
        assert!(!ws.is_empty());
    }

    #[test]
    fn test_empty_worksheet() {
        let ws = Worksheet::new("empty", Vec::new(), Vec::new());
        assert!(ws.is_empty());
    }
}
