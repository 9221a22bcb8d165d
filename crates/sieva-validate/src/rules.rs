//! Builtin rule factories
//!
//! Generic, template-agnostic validators shared by every rule catalog.
//! Each factory captures its configuration and returns a boxed rule value
//! that reads its subject and reports an error delta. Expected names are
//! lower-cased at construction, matching the lower-casing media entities
//! apply to their own file names.

use sieva_core::models::media::{ArchiveMedia, SingleMedia};
use sieva_core::models::report::{HeaderError, RowError};
use sieva_core::models::worksheet::Worksheet;

use crate::engine::{ArchiveRule, ContentFindings, ContentRule, FileRule};

/// Archive rule: every required base name must appear among the archive's
/// children. One error per missing name, in the input order of the required
/// list; present names cost nothing. Matching is extension-insensitive
/// (base names) and case-insensitive (both sides lower-cased).
pub fn required_files(required: &[&str]) -> ArchiveRule {
    let required: Vec<String> = required.iter().map(|name| name.to_lowercase()).collect();
    Box::new(move |archive: &ArchiveMedia| {
        required
            .iter()
            .filter(|name| {
                !archive
                    .children()
                    .iter()
                    .any(|child| child.base_name() == name.as_str())
            })
            .map(|name| format!("required file '{name}' is missing from the archive"))
            .collect()
    })
}

/// File rule: an empty byte buffer is an error.
pub fn non_empty_file() -> FileRule {
    Box::new(|file: &SingleMedia| {
        if file.raw_bytes().is_empty() {
            vec![format!("file '{}' is empty", file.file_name())]
        } else {
            Vec::new()
        }
    })
}

/// File rule: the raw byte size must not exceed `max_bytes`.
pub fn max_file_size(max_bytes: usize) -> FileRule {
    Box::new(move |file: &SingleMedia| {
        if file.raw_bytes().len() > max_bytes {
            vec![format!(
                "file '{}' is {} bytes, over the {} byte limit",
                file.file_name(),
                file.raw_bytes().len(),
                max_bytes
            )]
        } else {
            Vec::new()
        }
    })
}

/// File rule: the file extension must be on the allowlist.
pub fn allowed_extensions(extensions: &[&str]) -> FileRule {
    let allowed: Vec<String> = extensions.iter().map(|ext| ext.to_lowercase()).collect();
    Box::new(move |file: &SingleMedia| {
        let extension = file.file_name().rsplit('.').next().unwrap_or("").to_string();
        if allowed.contains(&extension) {
            Vec::new()
        } else {
            vec![format!(
                "file '{}' has an unexpected extension (allowed: {})",
                file.file_name(),
                allowed.join(", ")
            )]
        }
    })
}

/// File rule: the declared content type must be on the allowlist. MIME
/// parameters are stripped before comparing, so "text/csv; charset=utf-8"
/// matches "text/csv".
pub fn allowed_content_types(content_types: &[&str]) -> FileRule {
    let allowed: Vec<String> = content_types.iter().map(|ct| ct.to_lowercase()).collect();
    Box::new(move |file: &SingleMedia| {
        let normalized = file
            .content_type()
            .split(';')
            .next()
            .map(|s| s.trim())
            .unwrap_or("")
            .to_lowercase();
        if allowed.iter().any(|ct| *ct == normalized) {
            Vec::new()
        } else {
            vec![format!(
                "file '{}' has content type '{}' (allowed: {})",
                file.file_name(),
                file.content_type(),
                allowed.join(", ")
            )]
        }
    })
}

/// Content rule: every required column must appear in the header row.
/// One `HeaderError` per absent column, case-insensitive.
pub fn required_columns(columns: &[&str]) -> ContentRule {
    let required: Vec<String> = columns.iter().map(|col| col.to_lowercase()).collect();
    Box::new(move |worksheet: &Worksheet| {
        let headers: Vec<String> = worksheet
            .header_row()
            .iter()
            .map(|header| header.to_lowercase())
            .collect();

        let mut findings = ContentFindings::new();
        for column in &required {
            if !headers.contains(column) {
                findings.header_errors.push(HeaderError {
                    error_type: "header".to_string(),
                    code: "missing-column".to_string(),
                    message: format!("required column '{column}' not found"),
                    col: column.clone(),
                });
            }
        }
        findings
    })
}

/// Content rule: a worksheet with a header but no data rows records one
/// file-level error.
pub fn has_data_rows() -> ContentRule {
    Box::new(|worksheet: &Worksheet| {
        let mut findings = ContentFindings::new();
        if worksheet.data_rows().is_empty() {
            findings.file_errors.push(format!(
                "worksheet '{}' has no data rows",
                worksheet.sheet_name()
            ));
        }
        findings
    })
}

/// Content rule: every data row must have exactly as many cells as the
/// header. One `RowError` per offending row, 1-based row numbering.
pub fn row_width_matches_header() -> ContentRule {
    Box::new(|worksheet: &Worksheet| {
        let width = worksheet.header_row().len();
        let mut findings = ContentFindings::new();
        for (index, row) in worksheet.data_rows().iter().enumerate() {
            if row.len() != width {
                findings.row_errors.push(RowError {
                    error_type: "row".to_string(),
                    code: "width-mismatch".to_string(),
                    message: format!(
                        "row {} has {} cells, header has {}",
                        index + 1,
                        row.len(),
                        width
                    ),
                    row: index + 1,
                });
            }
        }
        findings
    })
}
