//! MIME classification helpers
//!
//! Two pure lookups used throughout the ingest pipeline: deciding whether a
//! declared content type denotes an archive, and inferring a content type
//! from a file name's extension.

use std::sync::LazyLock;

use regex::Regex;

/// Archive-family MIME patterns. Matched as substrings so extended MIME
/// strings ("application/zip; charset=binary") still classify.
static ARCHIVE_MIMETYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"zip|x-zip-compressed|x-rar-compressed").expect("valid regex"));

/// Returns `true` when the content type denotes a zip-family archive.
///
/// Total over all string inputs: an empty or unrecognized mimetype is simply
/// not an archive. Matching is case-sensitive, per the declared MIME values
/// browsers and object stores actually send.
pub fn is_archive_mimetype(mimetype: &str) -> bool {
    if mimetype.is_empty() {
        return false;
    }
    ARCHIVE_MIMETYPE.is_match(mimetype)
}

/// Infer a content type from a file name's extension.
///
/// Returns `""` when the extension is missing or unknown; callers treat
/// that as "no declared type" rather than an error.
pub fn mime_from_extension(file_name: &str) -> &'static str {
    let extension = match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => ext,
        _ => return "",
    };

    match extension.to_lowercase().as_str() {
        "txt" => "text/plain",
        "csv" => "text/csv",
        "tsv" => "text/tab-separated-values",
        "zip" => "application/zip",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "xls" => "application/vnd.ms-excel",
        "json" => "application/json",
        "xml" => "application/xml",
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_mimetypes_are_archives() {
        assert!(is_archive_mimetype("application/zip"));
        assert!(is_archive_mimetype("application/x-zip-compressed"));
        assert!(is_archive_mimetype("application/x-rar-compressed"));
    }

    #[test]
    fn test_extended_mime_string_still_classifies() {
        assert!(is_archive_mimetype("application/zip; charset=binary"));
    }

    #[test]
    fn test_empty_mimetype_is_not_archive() {
        assert!(!is_archive_mimetype(""));
    }

    #[test]
    fn test_plain_files_are_not_archives() {
        assert!(!is_archive_mimetype("text/csv"));
        assert!(!is_archive_mimetype("text/plain"));
        assert!(!is_archive_mimetype("application/octet-stream"));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert!(!is_archive_mimetype("APPLICATION/ZIP"));
    }

    #[test]
    fn test_mime_from_extension_known() {
        assert_eq!(mime_from_extension("report.csv"), "text/csv");
        assert_eq!(mime_from_extension("notes.txt"), "text/plain");
        assert_eq!(mime_from_extension("bundle.zip"), "application/zip");
        assert_eq!(mime_from_extension("photo.JPG"), "image/jpeg");
    }

    #[test]
    fn test_mime_from_extension_unknown_or_missing() {
        assert_eq!(mime_from_extension("mystery.xyz"), "");
        assert_eq!(mime_from_extension("no_extension"), "");
        assert_eq!(mime_from_extension(".hidden"), "");
    }
}
