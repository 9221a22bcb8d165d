//! Sieva Core Library
//!
//! This crate provides the domain models shared across all Sieva components:
//! the media entities produced by ingest, the validation state attached to
//! each entity, the worksheet view of tabular content, the serializable
//! report shapes handed to persistence/reporting layers, and the byte
//! classifier used to tell archives apart from singular files.

pub mod config;
pub mod mimetype;
pub mod models;

// Re-export commonly used types
pub use config::IngestLimits;
pub use mimetype::{is_archive_mimetype, mime_from_extension};
pub use models::media::{ArchiveMedia, Media, SingleMedia};
pub use models::report::{
    ContentReport, HeaderError, MediaReport, RowError, SubmissionReport,
};
pub use models::validation::ValidationState;
pub use models::worksheet::{Cell, Worksheet};
