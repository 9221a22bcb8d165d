//! Ingest resource limits
//!
//! Bounds applied while expanding uploaded payloads into the in-memory media
//! model. Archive expansion decompresses attacker-influenced bytes, so entry
//! counts and decompressed sizes are capped before anything is materialized.

// Common constants
const MAX_ARCHIVE_ENTRIES: usize = 1_000;
const MAX_ENTRY_BYTES: usize = 64 * 1024 * 1024;
const MAX_FILE_BYTES: usize = 256 * 1024 * 1024;

/// Limits enforced by the unknown-input parser.
///
/// Exceeding any limit aborts the parse (the payload is reported as
/// unparseable, not truncated).
#[derive(Clone, Debug)]
pub struct IngestLimits {
    /// Maximum number of usable (non-directory) entries in one archive
    pub max_archive_entries: usize,
    /// Maximum decompressed size of a single archive entry, in bytes
    pub max_entry_bytes: usize,
    /// Maximum size of a singular (non-archive) file, in bytes
    pub max_file_bytes: usize,
}

impl Default for IngestLimits {
    fn default() -> Self {
        Self {
            max_archive_entries: MAX_ARCHIVE_ENTRIES,
            max_entry_bytes: MAX_ENTRY_BYTES,
            max_file_bytes: MAX_FILE_BYTES,
        }
    }
}
