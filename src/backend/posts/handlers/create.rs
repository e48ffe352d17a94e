/**
 * Post Creation Handlers
 *
 * GET /post-form renders the empty form; POST /post-form creates a post for
 * the logged-in user and redirects home. Both sit behind the session guard.
 */

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use minijinja::context;

use super::types::{PostForm, POST_PICTURE_FIELD};
use crate::backend::error::{BackendError, StoreError};
use crate::backend::middleware::AuthUser;
use crate::backend::posts::db::{create_post, NewPost};
use crate::backend::routes::ROOT_PATH;
use crate::backend::server::state::AppState;
use crate::backend::uploads::read_multipart_form;
use crate::backend::views;

const TEMPLATE: &str = "post/post-form.html";

/// Render the empty post form
pub async fn post_form(AuthUser(session): AuthUser) -> Result<Response, BackendError> {
    views::page(TEMPLATE, context! { current_user => session.user })
}

/// Create post handler
///
/// # Arguments
///
/// * `State(state)` - Application state (database, upload store)
/// * `AuthUser(session)` - The logged-in creator
/// * `multipart` - `content`, `picName` and an optional `picPath` file
///
/// # Returns
///
/// `303 See Other` to `/` on success. A post the model rejects re-renders
/// the form with `422`; anything else becomes an error page.
pub async fn submit_post(
    State(state): State<AppState>,
    AuthUser(session): AuthUser,
    multipart: Multipart,
) -> Result<Response, BackendError> {
    let form = read_multipart_form::<PostForm>(multipart, POST_PICTURE_FIELD, state.uploads.as_ref()).await?;
    let PostForm { content, pic_name } = form.fields;

    let new_post = NewPost {
        content: content.clone(),
        pic_name: Some(pic_name.clone()),
        pic_path: form.file.map(|file| file.public_path),
        creator_id: session.user.id,
    };

    match create_post(&state.db_pool, new_post).await {
        Ok(post) => {
            tracing::info!("Post {} created by {}", post.id, session.user.username);
            Ok(Redirect::to(ROOT_PATH).into_response())
        }
        Err(StoreError::Validation(message)) => {
            tracing::warn!("Post rejected: {}", message);
            views::page_with_status(
                StatusCode::UNPROCESSABLE_ENTITY,
                TEMPLATE,
                context! {
                    current_user => session.user,
                    error_message => message,
                    content => content,
                    pic_name => pic_name,
                },
            )
        }
        Err(e) => {
            tracing::error!("Failed to create post: {}", e);
            Err(e.into())
        }
    }
}
