//! Sieva Ingest
//!
//! Turns raw, untrusted submission bytes into the typed media model. Two
//! input shapes are accepted: a direct multipart upload and an object-store
//! "get" result whose body resolves asynchronously. Zip-family payloads are
//! expanded into archive entities; everything else wraps as a single file.
//!
//! Parsing never panics and never throws: anything that cannot be
//! interpreted collapses to `None`. "Parsed" and "valid" are separate
//! concerns — a structurally decodable payload always parses, however wrong
//! its content turns out to be under validation.

pub mod error;
pub mod parser;
pub mod source;

pub use error::ParseError;
pub use parser::{parse_unknown_media, parse_unknown_zip};
pub use source::{ObjectBody, RawSubmission, StaticBody, StoredObject, UploadDescriptor};
