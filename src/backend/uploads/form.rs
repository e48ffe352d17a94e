/**
 * Multipart Form Reading
 *
 * Turns a `multipart/form-data` body into a typed input struct plus at most
 * one stored file. Text parts are collected by name and deserialized into
 * the handler's form type, so every handler declares its expected fields up
 * front. The part named `file_field` is written through the `UploadStore`.
 *
 * A file part without a filename or with an empty body is what browsers
 * send when no file was chosen; it counts as "no file".
 */

use axum::extract::Multipart;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::{StoredFile, UploadError, UploadStore};
use crate::backend::error::BackendError;
use crate::shared::SharedError;

/// A multipart body split into its typed fields and its optional file
#[derive(Debug)]
pub struct MultipartForm<T> {
    /// Text fields, deserialized into the handler's input type
    pub fields: T,
    /// The stored file, if one was submitted under the file field
    pub file: Option<StoredFile>,
}

/// Read a multipart body
///
/// # Arguments
///
/// * `multipart` - The request body
/// * `file_field` - Name of the single file part to store
/// * `uploads` - Where to store the file
///
/// # Errors
///
/// * `UploadError::Multipart` - The body is malformed
/// * `UploadError::Io` - The file could not be written
/// * `SharedError::SerializationError` - The text fields do not fit `T`
pub async fn read_multipart_form<T>(
    mut multipart: Multipart,
    file_field: &str,
    uploads: &dyn UploadStore,
) -> Result<MultipartForm<T>, BackendError>
where
    T: DeserializeOwned,
{
    let mut text_fields = Map::new();
    let mut file = None;

    while let Some(field) = multipart.next_field().await.map_err(UploadError::from)? {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);

        match file_name {
            Some(file_name) if name == file_field => {
                let bytes = field.bytes().await.map_err(UploadError::from)?;
                if file_name.is_empty() || bytes.is_empty() {
                    continue;
                }
                if file.is_some() {
                    tracing::warn!("Ignoring extra file submitted under '{}'", name);
                    continue;
                }
                file = Some(uploads.store(&file_name, &bytes).await?);
            }
            Some(_) => {
                tracing::warn!("Ignoring unexpected file field '{}'", name);
            }
            None => {
                let text = field.text().await.map_err(UploadError::from)?;
                text_fields.insert(name, Value::String(text));
            }
        }
    }

    let fields = serde_json::from_value(Value::Object(text_fields)).map_err(SharedError::from)?;

    Ok(MultipartForm { fields, file })
}
