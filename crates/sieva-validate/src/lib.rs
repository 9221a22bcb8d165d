//! Sieva Validate
//!
//! The worksheet extractor and the validator execution engine. The engine is
//! format- and rule-agnostic: rule catalogs are supplied by the caller per
//! template class, and every validator in a list always runs — the report
//! surfaces all problems in one pass instead of requiring iterative
//! re-submission.

pub mod engine;
pub mod rules;
pub mod worksheet;

pub use engine::{
    run_archive_validators, run_content_validators, run_file_validators, run_media_validators,
    validate_submission, ArchiveRule, ContentFindings, ContentRule, FileRule, RuleCatalog,
};
pub use worksheet::{extract_csv_worksheet, extract_mapped_worksheets};
