//! Worksheet extraction
//!
//! Turns spreadsheet-bearing media into [`Worksheet`] values. Row and column
//! order mirror the source exactly; nothing is re-sorted, de-duplicated, or
//! trimmed. Extraction is total: an empty or header-only buffer yields an
//! empty worksheet, and whether that is a problem belongs to a validator.

use sieva_core::models::media::{ArchiveMedia, SingleMedia};
use sieva_core::models::worksheet::{Cell, Worksheet};

/// Extract the implicit single sheet of a CSV-bearing file.
///
/// The whole byte buffer is one worksheet, named after the owning file's
/// base name. The first record becomes the header row; every following
/// record becomes a data row.
pub fn extract_csv_worksheet(media: &SingleMedia) -> Worksheet {
    read_csv(media.raw_bytes(), media.base_name())
}

/// Extract the worksheets an expected-sheet mapping asks for.
///
/// The mapping pairs a caller-defined classification key with the expected
/// lower-cased base name of an archive child. Only matching children are
/// extracted, in mapping order; children outside the mapping are silently
/// ignored — archive-level required-file rules own that concern, not the
/// extractor.
pub fn extract_mapped_worksheets<K: Clone>(
    archive: &ArchiveMedia,
    mapping: &[(K, String)],
) -> Vec<(K, Worksheet)> {
    let mut sheets = Vec::new();
    for (key, expected) in mapping {
        if let Some(child) = archive
            .children()
            .iter()
            .find(|child| child.base_name() == expected)
        {
            sheets.push((key.clone(), read_csv(child.raw_bytes(), child.base_name())));
        }
    }
    sheets
}

/// Decode CSV bytes into a worksheet.
///
/// Byte-record based so cells that are not valid UTF-8 decode lossily
/// instead of aborting the extraction. Records of uneven width are kept
/// as-is; width checks are a content validator's job.
fn read_csv(bytes: &[u8], sheet_name: &str) -> Worksheet {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut header_row: Vec<String> = Vec::new();
    let mut data_rows: Vec<Vec<Cell>> = Vec::new();
    let mut saw_header = false;

    for record in reader.byte_records().flatten() {
        if !saw_header {
            header_row = record
                .iter()
                .map(|field| String::from_utf8_lossy(field).into_owned())
                .collect();
            saw_header = true;
        } else {
            data_rows.push(
                record
                    .iter()
                    .map(|field| Cell::from_field(&String::from_utf8_lossy(field)))
                    .collect(),
            );
        }
    }

    tracing::trace!(
        sheet = sheet_name,
        columns = header_row.len(),
        rows = data_rows.len(),
        "extracted worksheet"
    );
    Worksheet::new(sheet_name, header_row, data_rows)
}
