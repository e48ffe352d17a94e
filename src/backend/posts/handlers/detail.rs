/**
 * Post Detail Handler
 *
 * GET /post/{id} renders one post with its creator, its comments in the
 * order they were added, and each comment's author.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use minijinja::context;
use uuid::Uuid;

use super::types::parse_post_id;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::posts::db::get_post_detail;
use crate::backend::server::state::AppState;
use crate::backend::views;
use crate::shared::UserProfile;

const TEMPLATE: &str = "post/post.html";

/// Post detail handler
///
/// # Errors
///
/// * `404 Not Found` - The id is malformed or names no post
/// * `500 Internal Server Error` - The store failed
pub async fn show_post(
    State(state): State<AppState>,
    AuthUser(session): AuthUser,
    Path(id): Path<String>,
) -> Result<Response, BackendError> {
    let id = parse_post_id(&id)?;
    render_post(&state, id, session.user, StatusCode::OK, None).await
}

/// Load a post and render its detail page
///
/// Shared with the comment handler, which re-renders the page when a
/// comment is rejected.
pub(super) async fn render_post(
    state: &AppState,
    id: Uuid,
    current_user: UserProfile,
    status: StatusCode,
    error_message: Option<String>,
) -> Result<Response, BackendError> {
    let post_detail = get_post_detail(&state.db_pool, id).await.map_err(|e| {
        tracing::error!("Failed to load post {}: {}", id, e);
        e
    })?;

    let Some(post_detail) = post_detail else {
        tracing::warn!("Post {} not found", id);
        return Err(BackendError::not_found());
    };

    views::page_with_status(
        status,
        TEMPLATE,
        context! {
            post_detail => post_detail,
            current_user => current_user,
            error_message => error_message,
        },
    )
}
