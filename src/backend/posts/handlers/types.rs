/**
 * Post Handler Types
 *
 * Text fields of the post and comment forms. The file parts (`picPath`,
 * `imagePath`) are stored by the upload layer and never reach these types.
 */

use serde::Deserialize;
use uuid::Uuid;

use crate::backend::error::BackendError;

/// Multipart file field of the post form
pub const POST_PICTURE_FIELD: &str = "picPath";

/// Multipart file field of the comment form
pub const COMMENT_IMAGE_FIELD: &str = "imagePath";

/// New post form
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PostForm {
    pub content: String,
    #[serde(rename = "picName")]
    pub pic_name: String,
}

/// New comment form
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CommentForm {
    pub content: String,
    #[serde(rename = "imageName")]
    pub image_name: String,
}

/// Parse a post id taken from the URL
///
/// Anything that is not a UUID cannot name a post, so it is a 404 rather
/// than a bad request.
pub fn parse_post_id(raw: &str) -> Result<Uuid, BackendError> {
    Uuid::parse_str(raw).map_err(|_| {
        tracing::warn!("Malformed post id: {}", raw);
        BackendError::not_found()
    })
}
