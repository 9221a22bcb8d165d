//! Ingest error types

use thiserror::Error;

/// Why a raw payload could not be turned into a media entity.
///
/// These never escape [`crate::parse_unknown_media`], which collapses them
/// to `None` after logging; they are public so direct users of
/// [`crate::parse_unknown_zip`] can tell a corrupt archive from a limit hit.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to decode zip payload: {0}")]
    BadArchive(#[from] zip::result::ZipError),

    #[error("failed to decompress zip entry '{name}': {source}")]
    EntryRead {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("entry '{name}' decompresses to {size} bytes, over the {limit} byte limit")]
    EntryTooLarge {
        name: String,
        size: u64,
        limit: usize,
    },

    #[error("archive holds more than {0} usable entries")]
    TooManyEntries(usize),

    #[error("file of {size} bytes exceeds the {limit} byte ingest limit")]
    FileTooLarge { size: usize, limit: usize },
}
