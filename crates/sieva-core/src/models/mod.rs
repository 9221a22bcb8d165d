//! Domain models

pub mod media;
pub mod report;
pub mod validation;
pub mod worksheet;

pub use media::{ArchiveMedia, Media, SingleMedia};
pub use report::{ContentReport, HeaderError, MediaReport, RowError, SubmissionReport};
pub use validation::ValidationState;
pub use worksheet::{Cell, Worksheet};
