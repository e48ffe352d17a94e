//! Upload Module
//!
//! File uploads are an injected capability: handlers hand the bytes of a
//! submitted file to an `UploadStore` and get back a `StoredFile` whose
//! public path is what gets persisted on the User, Post or Comment.
//! Handlers never touch the filesystem themselves.
//!
//! # Module Structure
//!
//! ```text
//! uploads/
//! ├── mod.rs  - UploadStore trait, StoredFile, UploadError
//! ├── disk.rs - DiskUploadStore, writes files under a directory
//! └── form.rs - Reads a multipart body into a typed form plus one file
//! ```
//!
//! Files are written as soon as the multipart body is read, before the
//! handler validates anything. A request that later fails leaves its file
//! behind.

use async_trait::async_trait;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// Disk-backed upload store
pub mod disk;

/// Multipart form reading
pub mod form;

pub use disk::DiskUploadStore;
pub use form::{read_multipart_form, MultipartForm};

/// A file that has been written to upload storage
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StoredFile {
    /// Generated filename inside the upload directory
    pub filename: String,
    /// URL path the file is served under, e.g. `/avatar/<filename>`
    pub public_path: String,
}

/// Upload errors
#[derive(Debug, Error)]
pub enum UploadError {
    /// The multipart body could not be read
    #[error("Multipart error: {0}")]
    Multipart(#[from] MultipartError),

    /// The file could not be written
    #[error("Upload I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl UploadError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Multipart(err) => err.status(),
            Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Storage for uploaded files
#[async_trait]
pub trait UploadStore: Send + Sync {
    /// Persist `bytes` and return where they can be found
    ///
    /// `original_name` is the client-supplied filename; implementations may
    /// use its extension but must not trust it as a path.
    async fn store(&self, original_name: &str, bytes: &[u8]) -> Result<StoredFile, UploadError>;
}
