//! Per-subject validation state
//!
//! Every media entity carries one `ValidationState`: an append-only error
//! ledger that validators write findings into. Validity latches false on the
//! first non-empty batch and never recovers within a pass, so a report can
//! always be cut from the state without re-deriving anything.

use crate::models::report::MediaReport;

/// Append-only error ledger for one validated subject.
#[derive(Debug, Clone)]
pub struct ValidationState {
    subject_name: String,
    errors: Vec<String>,
    is_valid: bool,
}

impl ValidationState {
    /// Create a fresh, valid state for the named subject.
    pub fn new(subject_name: impl Into<String>) -> Self {
        Self {
            subject_name: subject_name.into(),
            errors: Vec::new(),
            is_valid: true,
        }
    }

    /// Name of the subject this state belongs to.
    pub fn subject_name(&self) -> &str {
        &self.subject_name
    }

    /// Errors recorded so far, in append order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Whether any validator has recorded a finding yet.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Append a batch of errors.
    ///
    /// An empty batch is a no-op and does not touch validity; a non-empty
    /// batch latches `is_valid` to `false` permanently. Errors are never
    /// deduplicated or reordered.
    pub fn append(&mut self, batch: impl IntoIterator<Item = String>) {
        let before = self.errors.len();
        self.errors.extend(batch);
        if self.errors.len() > before {
            self.is_valid = false;
        }
    }

    /// Cut an immutable report record from the current state.
    pub fn snapshot(&self) -> MediaReport {
        MediaReport {
            file_name: self.subject_name.clone(),
            file_errors: self.errors.clone(),
            is_valid: self.is_valid,
        }
    }
}
