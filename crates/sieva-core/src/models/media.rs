//! Media entities
//!
//! In-memory representation of a parsed submission: either one singular file
//! or an archive expanded into an ordered set of child files. Entities are
//! request-scoped values, constructed once by the ingest parser; only their
//! validation state mutates afterwards.

use crate::models::report::MediaReport;
use crate::models::validation::ValidationState;

/// A single uploaded file.
///
/// File names are normalized to lower-case at construction, so "required
/// file" checks compare against lower-cased expected names.
#[derive(Debug, Clone)]
pub struct SingleMedia {
    file_name: String,
    content_type: String,
    raw_bytes: Vec<u8>,
    state: ValidationState,
}

impl SingleMedia {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        raw_bytes: Vec<u8>,
    ) -> Self {
        let file_name = file_name.into().to_lowercase();
        let state = ValidationState::new(file_name.clone());
        Self {
            file_name,
            content_type: content_type.into(),
            raw_bytes,
            state,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn raw_bytes(&self) -> &[u8] {
        &self.raw_bytes
    }

    /// File name with its final extension removed ("occurrence.csv" ->
    /// "occurrence"). Names without an extension are returned whole.
    pub fn base_name(&self) -> &str {
        match self.file_name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => &self.file_name,
        }
    }

    pub fn state(&self) -> &ValidationState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ValidationState {
        &mut self.state
    }

    pub fn snapshot(&self) -> MediaReport {
        self.state.snapshot()
    }
}

/// An uploaded zip archive expanded into its member files.
///
/// `children` holds one [`SingleMedia`] per non-directory entry, in zip
/// directory iteration order, each named by the entry's local name with any
/// folder prefix stripped. Nested folder structure is intentionally
/// discarded.
#[derive(Debug, Clone)]
pub struct ArchiveMedia {
    file_name: String,
    content_type: String,
    raw_bytes: Vec<u8>,
    state: ValidationState,
    children: Vec<SingleMedia>,
}

impl ArchiveMedia {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        raw_bytes: Vec<u8>,
        children: Vec<SingleMedia>,
    ) -> Self {
        let file_name = file_name.into().to_lowercase();
        let state = ValidationState::new(file_name.clone());
        Self {
            file_name,
            content_type: content_type.into(),
            raw_bytes,
            state,
            children,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn raw_bytes(&self) -> &[u8] {
        &self.raw_bytes
    }

    pub fn children(&self) -> &[SingleMedia] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [SingleMedia] {
        &mut self.children
    }

    pub fn state(&self) -> &ValidationState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ValidationState {
        &mut self.state
    }

    pub fn snapshot(&self) -> MediaReport {
        self.state.snapshot()
    }
}

/// A parsed submission: one file or one archive of files.
///
/// Consumers match exhaustively on the tag instead of probing types at
/// runtime.
#[derive(Debug, Clone)]
pub enum Media {
    Single(SingleMedia),
    Archive(ArchiveMedia),
}

impl Media {
    pub fn file_name(&self) -> &str {
        match self {
            Media::Single(file) => file.file_name(),
            Media::Archive(archive) => archive.file_name(),
        }
    }

    pub fn content_type(&self) -> &str {
        match self {
            Media::Single(file) => file.content_type(),
            Media::Archive(archive) => archive.content_type(),
        }
    }
}
