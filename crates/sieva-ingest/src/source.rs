//! Raw submission shapes
//!
//! The two input forms the parser normalizes: an already-buffered multipart
//! upload, and an object-store result whose body still has to be fetched.

use async_trait::async_trait;
use bytes::Bytes;

/// A direct upload: original file name plus the buffered request body.
///
/// The content type is deliberately absent — the upload path re-derives it
/// from the file extension during parsing.
pub struct UploadDescriptor {
    pub file_name: String,
    pub buffer: Vec<u8>,
}

/// Deferred access to an object-store body.
///
/// Resolving is the single async boundary in the ingest path. `None` means
/// the bytes could not be obtained (storage gap, cancellation); the parser
/// fails closed on it.
#[async_trait]
pub trait ObjectBody: Send + Sync {
    async fn resolve(&self) -> Option<Bytes>;
}

/// In-memory [`ObjectBody`]: the trivial implementation for callers that
/// already hold the bytes, and for tests.
pub struct StaticBody {
    bytes: Option<Bytes>,
}

impl StaticBody {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self {
            bytes: Some(bytes.into()),
        }
    }

    /// A body that fails to resolve, modeling a storage gap.
    pub fn missing() -> Self {
        Self { bytes: None }
    }
}

#[async_trait]
impl ObjectBody for StaticBody {
    async fn resolve(&self) -> Option<Bytes> {
        self.bytes.clone()
    }
}

/// An object-store "get" result: metadata is present immediately, the body
/// resolves later. The declared content type is trusted as-is.
pub struct StoredObject {
    pub file_name: String,
    pub content_type: String,
    pub body: Box<dyn ObjectBody>,
}

/// One raw submission, discriminated by where it came from.
pub enum RawSubmission {
    Upload(UploadDescriptor),
    Stored(StoredObject),
}
