//! Unknown-input parser
//!
//! Normalizes both raw submission shapes into the typed media model. The
//! public entry point returns `Option<Media>`: internal failures are typed
//! ([`ParseError`]) but are logged and collapsed to `None` at the boundary,
//! so callers map a missing result to a single "could not parse submission"
//! outcome.

use std::io::{Cursor, Read};
use std::path::Path;

use sieva_core::mimetype::{is_archive_mimetype, mime_from_extension};
use sieva_core::models::media::{ArchiveMedia, Media, SingleMedia};
use sieva_core::IngestLimits;

use crate::error::ParseError;
use crate::source::{RawSubmission, StoredObject, UploadDescriptor};

/// Parse one raw submission into a media entity.
///
/// Returns `None` when the payload cannot be interpreted: an unresolvable
/// stored body, a corrupt zip behind an archive content type, or a payload
/// that blows past the ingest limits. Anything parseable wraps successfully,
/// even if it will later fail media or content validation.
pub async fn parse_unknown_media(input: RawSubmission, limits: &IngestLimits) -> Option<Media> {
    match input {
        RawSubmission::Upload(upload) => parse_upload(upload, limits),
        RawSubmission::Stored(stored) => parse_stored(stored, limits).await,
    }
}

/// Upload path: the content type is re-derived from the file extension, not
/// taken from whatever the client declared. Spoofed extensions therefore
/// steer classification here; the stored path below is the trusting one.
fn parse_upload(upload: UploadDescriptor, limits: &IngestLimits) -> Option<Media> {
    let content_type = mime_from_extension(&upload.file_name).to_string();
    wrap_media(upload.file_name, content_type, upload.buffer, limits)
}

/// Stored path: the declared content type is trusted as-is, and the body is
/// resolved through the single async boundary of the ingest pipeline. A body
/// that fails to load is a parse failure even when a zip was declared — an
/// empty archive is never synthesized for bytes that never arrived.
async fn parse_stored(stored: StoredObject, limits: &IngestLimits) -> Option<Media> {
    let Some(bytes) = stored.body.resolve().await else {
        tracing::debug!(file_name = %stored.file_name, "stored object body did not resolve");
        return None;
    };
    wrap_media(stored.file_name, stored.content_type, bytes.to_vec(), limits)
}

fn wrap_media(
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
    limits: &IngestLimits,
) -> Option<Media> {
    if is_archive_mimetype(&content_type) {
        match parse_unknown_zip(&bytes, limits) {
            Ok(children) => Some(Media::Archive(ArchiveMedia::new(
                file_name,
                content_type,
                bytes,
                children,
            ))),
            Err(err) => {
                tracing::debug!(
                    file_name = %file_name,
                    error = %err,
                    "unable to expand archive payload"
                );
                None
            }
        }
    } else {
        if bytes.len() > limits.max_file_bytes {
            let err = ParseError::FileTooLarge {
                size: bytes.len(),
                limit: limits.max_file_bytes,
            };
            tracing::warn!(file_name = %file_name, error = %err, "rejecting oversized file");
            return None;
        }
        Some(Media::Single(SingleMedia::new(file_name, content_type, bytes)))
    }
}

/// Expand a zip payload into child media entities.
///
/// Entries are visited in zip directory order; directory entries are
/// skipped. Each file entry keeps only its local name (folder prefixes are
/// stripped — nested structure is intentionally flattened), gets a content
/// type inferred from that name, and carries its decompressed bytes. An
/// archive containing only directory entries yields an empty vec, not an
/// error: it is a valid, empty archive.
pub fn parse_unknown_zip(
    bytes: &[u8],
    limits: &IngestLimits,
) -> Result<Vec<SingleMedia>, ParseError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;

    let mut children = Vec::new();
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        if entry.is_dir() {
            continue;
        }
        if children.len() >= limits.max_archive_entries {
            return Err(ParseError::TooManyEntries(limits.max_archive_entries));
        }
        if entry.size() > limits.max_entry_bytes as u64 {
            return Err(ParseError::EntryTooLarge {
                name: entry.name().to_string(),
                size: entry.size(),
                limit: limits.max_entry_bytes,
            });
        }

        let local_name = local_entry_name(entry.name(), index);
        let content_type = mime_from_extension(&local_name);

        let mut data = Vec::with_capacity(entry.size() as usize);
        entry
            .read_to_end(&mut data)
            .map_err(|source| ParseError::EntryRead {
                name: local_name.clone(),
                source,
            })?;

        children.push(SingleMedia::new(local_name, content_type, data));
    }

    tracing::debug!(entries = children.len(), "expanded zip payload");
    Ok(children)
}

/// Local name of a zip entry: the final path segment, with traversal
/// components discarded. Entries whose names reduce to nothing fall back to
/// a positional name.
fn local_entry_name(entry_name: &str, index: usize) -> String {
    Path::new(entry_name)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != "." && *s != "..")
        .map(|s| s.to_string())
        .unwrap_or_else(|| format!("entry_{index}"))
}
