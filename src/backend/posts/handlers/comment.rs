/**
 * Comment Creation Handler
 *
 * POST /post/{id} adds a comment by the logged-in user to a post and
 * redirects back to the post.
 */

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

use super::detail::render_post;
use super::types::{parse_post_id, CommentForm, COMMENT_IMAGE_FIELD};
use crate::backend::error::{BackendError, StoreError};
use crate::backend::middleware::AuthUser;
use crate::backend::posts::comments::{add_comment_to_post, NewComment};
use crate::backend::routes::post_path;
use crate::backend::server::state::AppState;
use crate::backend::uploads::read_multipart_form;

/// Create comment handler
///
/// # Arguments
///
/// * `State(state)` - Application state (database, upload store)
/// * `AuthUser(session)` - The logged-in author
/// * `Path(id)` - Target post id
/// * `multipart` - `content`, `imageName` and an optional `imagePath` file
///
/// # Returns
///
/// `303 See Other` to `/post/{id}` on success. A comment the model rejects
/// re-renders the post with `422`; an unknown post is a `404`.
pub async fn submit_comment(
    State(state): State<AppState>,
    AuthUser(session): AuthUser,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<Response, BackendError> {
    let post_id = parse_post_id(&id)?;
    let form = read_multipart_form::<CommentForm>(multipart, COMMENT_IMAGE_FIELD, state.uploads.as_ref()).await?;

    let new_comment = NewComment {
        content: form.fields.content,
        image_name: Some(form.fields.image_name),
        image_path: form.file.map(|file| file.public_path),
        post_id,
        author_id: session.user.id,
    };

    match add_comment_to_post(&state.db_pool, new_comment).await {
        Ok((comment, post)) => {
            tracing::info!(
                "Comment {} added to post {} by {} ({} comments)",
                comment.id,
                post.id,
                session.user.username,
                post.comments.len()
            );
            Ok(Redirect::to(&post_path(post.id)).into_response())
        }
        Err(StoreError::Validation(message)) => {
            tracing::warn!("Comment rejected: {}", message);
            render_post(
                &state,
                post_id,
                session.user,
                StatusCode::UNPROCESSABLE_ENTITY,
                Some(message),
            )
            .await
        }
        Err(e) => {
            tracing::error!("Failed to add comment to post {}: {}", post_id, e);
            Err(e.into())
        }
    }
}
