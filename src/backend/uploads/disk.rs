/**
 * Disk Upload Store
 *
 * Writes uploaded files into a single directory under generated names and
 * reports the public path the router serves them from.
 */

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use uuid::Uuid;

use super::{StoredFile, UploadError, UploadStore};

/// Longest extension kept from a client-supplied filename
const MAX_EXTENSION_LEN: usize = 10;

/// Upload store backed by a local directory
#[derive(Debug, Clone)]
pub struct DiskUploadStore {
    dir: PathBuf,
    url_prefix: String,
}

impl DiskUploadStore {
    /// Create a store writing into `dir`, served under `url_prefix`
    pub fn new(dir: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        let url_prefix: String = url_prefix.into();
        Self {
            dir: dir.into(),
            url_prefix: url_prefix.trim_end_matches('/').to_string(),
        }
    }

    fn generate_filename(original_name: &str) -> String {
        let extension = Path::new(original_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .filter(|ext| {
                !ext.is_empty()
                    && ext.len() <= MAX_EXTENSION_LEN
                    && ext.chars().all(|c| c.is_ascii_alphanumeric())
            })
            .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
            .unwrap_or_default();

        format!("{}{}", Uuid::new_v4().simple(), extension)
    }
}

#[async_trait]
impl UploadStore for DiskUploadStore {
    async fn store(&self, original_name: &str, bytes: &[u8]) -> Result<StoredFile, UploadError> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let filename = Self::generate_filename(original_name);
        tokio::fs::write(self.dir.join(&filename), bytes).await?;

        tracing::debug!("Stored upload {} ({} bytes)", filename, bytes.len());

        Ok(StoredFile {
            public_path: format!("{}/{}", self.url_prefix, filename),
            filename,
        })
    }
}
