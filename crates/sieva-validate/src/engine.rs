//! Validator execution engine
//!
//! Runs ordered validator lists against media entities and worksheets.
//! Validators are values: boxed functions that inspect a subject and return
//! a delta of findings, which the engine folds into the subject's validation
//! state (media) or an engine-local accumulator (content). Every validator
//! in a list runs, in the order given, regardless of what earlier validators
//! found — no short-circuiting, no truncation, no deduplication.
//!
//! Rule authors must keep their error text independent of list order: the
//! engine guarantees that running the same rule set in any order yields the
//! same validity verdict, and only message ordering may differ.

use sieva_core::models::media::{ArchiveMedia, Media, SingleMedia};
use sieva_core::models::report::{
    ContentReport, HeaderError, MediaReport, RowError, SubmissionReport,
};
use sieva_core::models::worksheet::Worksheet;

use crate::worksheet::{extract_csv_worksheet, extract_mapped_worksheets};

/// Media-level validator for one singular file.
pub type FileRule = Box<dyn Fn(&SingleMedia) -> Vec<String> + Send + Sync>;

/// Media-level validator for a whole archive. Receives the archive, not an
/// individual child, so it can reason about cross-file invariants such as
/// "required file present". It reads `children` but records findings only
/// against the archive's own state.
pub type ArchiveRule = Box<dyn Fn(&ArchiveMedia) -> Vec<String> + Send + Sync>;

/// Findings one content validator produced against one worksheet.
///
/// Header and row error records are opaque to the engine; their fields mean
/// whatever the producing validator says they mean.
#[derive(Debug, Default)]
pub struct ContentFindings {
    pub file_errors: Vec<String>,
    pub header_errors: Vec<HeaderError>,
    pub row_errors: Vec<RowError>,
}

impl ContentFindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.file_errors.is_empty() && self.header_errors.is_empty() && self.row_errors.is_empty()
    }
}

/// Content-level validator for one worksheet.
pub type ContentRule = Box<dyn Fn(&Worksheet) -> ContentFindings + Send + Sync>;

/// Run file rules against one singular file, in order, folding each delta
/// into the file's validation state; the report snapshots the state after
/// the full list has run.
pub fn run_file_validators(file: &mut SingleMedia, rules: &[FileRule]) -> MediaReport {
    for rule in rules {
        let batch = rule(&*file);
        file.state_mut().append(batch);
    }
    file.snapshot()
}

/// Run archive rules against the archive itself, then file rules against
/// every child. Reports follow target iteration order: the archive first,
/// then its children in directory order.
pub fn run_archive_validators(
    archive: &mut ArchiveMedia,
    archive_rules: &[ArchiveRule],
    file_rules: &[FileRule],
) -> Vec<MediaReport> {
    for rule in archive_rules {
        let batch = rule(&*archive);
        archive.state_mut().append(batch);
    }

    let mut reports = vec![archive.snapshot()];
    for child in archive.children_mut() {
        reports.push(run_file_validators(child, file_rules));
    }
    reports
}

/// Media-level pass over one parsed submission, dispatching on the media
/// tag. Returns one report per validated subject.
pub fn run_media_validators(
    media: &mut Media,
    file_rules: &[FileRule],
    archive_rules: &[ArchiveRule],
) -> Vec<MediaReport> {
    match media {
        Media::Single(file) => vec![run_file_validators(file, file_rules)],
        Media::Archive(archive) => run_archive_validators(archive, archive_rules, file_rules),
    }
}

/// Run content rules against one worksheet, folding findings into a fresh
/// report. Worksheets stay immutable; the accumulator lives here.
pub fn run_content_validators(worksheet: &Worksheet, rules: &[ContentRule]) -> ContentReport {
    let mut report = ContentReport::new(worksheet.sheet_name());
    for rule in rules {
        let findings = rule(worksheet);
        report.file_errors.extend(findings.file_errors);
        report.header_errors.extend(findings.header_errors);
        report.row_errors.extend(findings.row_errors);
    }
    report.is_valid = report.file_errors.is_empty()
        && report.header_errors.is_empty()
        && report.row_errors.is_empty();
    report
}

/// Per-template-class rule catalog.
///
/// The engine is generic over the classification key so new template
/// families plug in without touching engine code. `sheets` maps each key to
/// the expected lower-cased base name of the file/sheet carrying that
/// content.
pub trait RuleCatalog {
    type Key: Clone;

    fn file_rules(&self) -> &[FileRule];
    fn archive_rules(&self) -> &[ArchiveRule];
    fn sheets(&self) -> &[(Self::Key, String)];
    fn content_rules(&self, key: &Self::Key) -> &[ContentRule];
}

/// Two-phase validation of one submission.
///
/// Phase one runs media-level rules. If any subject comes back invalid the
/// content phase is skipped entirely — content validation presupposes
/// structurally valid files — and the report carries zero content entries.
/// Phase two extracts the catalog's expected worksheets and runs content
/// rules per sheet.
pub fn validate_submission<C: RuleCatalog>(media: &mut Media, catalog: &C) -> SubmissionReport {
    let media_reports = run_media_validators(media, catalog.file_rules(), catalog.archive_rules());

    if media_reports.iter().any(|report| !report.is_valid) {
        tracing::debug!(
            file_name = media.file_name(),
            "media-level validation failed, skipping content validation"
        );
        return SubmissionReport {
            media: media_reports,
            content: Vec::new(),
            is_valid: false,
        };
    }

    let mut content = Vec::new();
    match &*media {
        Media::Single(file) => {
            if let Some((key, worksheet)) = implicit_sheet(file, catalog.sheets()) {
                content.push(run_content_validators(&worksheet, catalog.content_rules(&key)));
            }
        }
        Media::Archive(archive) => {
            for (key, worksheet) in extract_mapped_worksheets(archive, catalog.sheets()) {
                content.push(run_content_validators(&worksheet, catalog.content_rules(&key)));
            }
        }
    }

    let is_valid = content.iter().all(|report| report.is_valid);
    SubmissionReport {
        media: media_reports,
        content,
        is_valid,
    }
}

/// Resolve the worksheet key for a singular file: match its base name
/// against the sheet mapping, falling back to a sole mapping entry (implicit
/// single-sheet mode — the file is the sheet). With no match and no sole
/// entry, no content rules apply.
fn implicit_sheet<K: Clone>(
    file: &SingleMedia,
    mapping: &[(K, String)],
) -> Option<(K, Worksheet)> {
    if let Some((key, _)) = mapping.iter().find(|(_, name)| name == file.base_name()) {
        return Some((key.clone(), extract_csv_worksheet(file)));
    }
    if let [(key, _)] = mapping {
        return Some((key.clone(), extract_csv_worksheet(file)));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, bytes: &[u8]) -> SingleMedia {
        SingleMedia::new(name, "text/csv", bytes.to_vec())
    }

    fn always_fails(message: &str) -> FileRule {
        let message = message.to_string();
        Box::new(move |_| vec![message.clone()])
    }

    fn always_passes() -> FileRule {
        Box::new(|_| Vec::new())
    }

    #[test]
    fn test_all_file_rules_run_without_short_circuit() {
        let mut media = file("data.csv", b"id\n1");
        let rules = vec![
            always_fails("first problem"),
            always_passes(),
            always_fails("second problem"),
        ];

        let report = run_file_validators(&mut media, &rules);
        assert!(!report.is_valid);
        assert_eq!(
            report.file_errors,
            vec!["first problem".to_string(), "second problem".to_string()]
        );
    }

    #[test]
    fn test_passing_rules_leave_subject_valid() {
        let mut media = file("data.csv", b"id\n1");
        let report = run_file_validators(&mut media, &[always_passes(), always_passes()]);
        assert!(report.is_valid);
        assert!(report.file_errors.is_empty());
    }

    #[test]
    fn test_validity_is_commutative_over_rule_order() {
        let rules_ab = vec![always_fails("a"), always_fails("b")];
        let rules_ba = vec![always_fails("b"), always_fails("a")];

        let report_ab = run_file_validators(&mut file("data.csv", b"x"), &rules_ab);
        let report_ba = run_file_validators(&mut file("data.csv", b"x"), &rules_ba);

        assert_eq!(report_ab.is_valid, report_ba.is_valid);
        // Message order follows rule order; validity does not
        assert_ne!(report_ab.file_errors, report_ba.file_errors);
    }

    #[test]
    fn test_archive_reports_follow_target_order() {
        let mut archive = ArchiveMedia::new(
            "bundle.zip",
            "application/zip",
            Vec::new(),
            vec![file("a.csv", b"1"), file("b.csv", b"2")],
        );
        let archive_rules: Vec<ArchiveRule> =
            vec![Box::new(|_| vec!["archive problem".to_string()])];

        let reports = run_archive_validators(&mut archive, &archive_rules, &[]);
        let names: Vec<&str> = reports.iter().map(|r| r.file_name.as_str()).collect();
        assert_eq!(names, vec!["bundle.zip", "a.csv", "b.csv"]);
        assert!(!reports[0].is_valid);
        assert!(reports[1].is_valid);
    }

    #[test]
    fn test_content_validators_fold_all_findings() {
        let worksheet = Worksheet::new("event", vec!["id".to_string()], Vec::new());
        let rules: Vec<ContentRule> = vec![
            Box::new(|_| ContentFindings {
                file_errors: vec!["no rows".to_string()],
                ..ContentFindings::new()
            }),
            Box::new(|_| ContentFindings::new()),
            Box::new(|_| ContentFindings {
                header_errors: vec![HeaderError {
                    error_type: "header".to_string(),
                    code: "missing-column".to_string(),
                    message: "required column 'date' not found".to_string(),
                    col: "date".to_string(),
                }],
                ..ContentFindings::new()
            }),
        ];

        let report = run_content_validators(&worksheet, &rules);
        assert!(!report.is_valid);
        assert_eq!(report.file_errors.len(), 1);
        assert_eq!(report.header_errors.len(), 1);
        assert!(report.row_errors.is_empty());
    }

    #[test]
    fn test_empty_rule_list_is_a_clean_pass() {
        let worksheet = Worksheet::new("event", Vec::new(), Vec::new());
        let report = run_content_validators(&worksheet, &[]);
        assert!(report.is_valid);
    }
}
