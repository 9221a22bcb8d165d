//! Validation report shapes
//!
//! The serializable artifacts handed to persistence and reporting layers.
//! Field names are camelCase on the wire. Header/row error records are
//! produced by content validators and aggregated, never interpreted, by the
//! engine.

use serde::{Deserialize, Serialize};

/// Media-level result for one validated subject (a file or an archive).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaReport {
    pub file_name: String,
    pub file_errors: Vec<String>,
    pub is_valid: bool,
}

/// A finding against one header column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderError {
    #[serde(rename = "type")]
    pub error_type: String,
    pub code: String,
    pub message: String,
    pub col: String,
}

/// A finding against one data row (1-based row numbering, header excluded).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowError {
    #[serde(rename = "type")]
    pub error_type: String,
    pub code: String,
    pub message: String,
    pub row: usize,
}

/// Content-level result for one validated worksheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentReport {
    pub file_name: String,
    pub file_errors: Vec<String>,
    pub header_errors: Vec<HeaderError>,
    pub row_errors: Vec<RowError>,
    pub is_valid: bool,
}

impl ContentReport {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            file_errors: Vec::new(),
            header_errors: Vec::new(),
            row_errors: Vec::new(),
            is_valid: true,
        }
    }
}

/// Combined two-phase result for one submission.
///
/// `content` is empty whenever any media item failed the media-level pass:
/// content validation presupposes structurally valid files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReport {
    pub media: Vec<MediaReport>,
    pub content: Vec<ContentReport>,
    pub is_valid: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_report_wire_shape() {
        let report = MediaReport {
            file_name: "event.csv".to_string(),
            file_errors: vec!["empty file".to_string()],
            is_valid: false,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["fileName"], "event.csv");
        assert_eq!(json["fileErrors"][0], "empty file");
        assert_eq!(json["isValid"], false);
    }

    #[test]
    fn test_header_error_wire_shape() {
        let err = HeaderError {
            error_type: "header".to_string(),
            code: "missing-column".to_string(),
            message: "required column 'eventid' not found".to_string(),
            col: "eventid".to_string(),
        };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "header");
        assert_eq!(json["code"], "missing-column");
        assert_eq!(json["col"], "eventid");
    }

    #[test]
    fn test_content_report_roundtrip() {
        let mut report = ContentReport::new("occurrence");
        report.row_errors.push(RowError {
            error_type: "row".to_string(),
            code: "width-mismatch".to_string(),
            message: "row has 3 cells, header has 4".to_string(),
            row: 2,
        });
        report.is_valid = false;

        let json = serde_json::to_string(&report).unwrap();
        let back: ContentReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
        assert_eq!(back.row_errors[0].row, 2);
    }
}
