/**
 * Home Page Handler
 *
 * GET / lists every post, newest first. Open to everyone; the navigation
 * changes when a session is present.
 */

use axum::{extract::State, response::Response};
use minijinja::context;

use crate::backend::error::BackendError;
use crate::backend::middleware::MaybeUser;
use crate::backend::posts::db::list_posts;
use crate::backend::server::state::AppState;
use crate::backend::views;

/// Home page handler
pub async fn home(
    State(state): State<AppState>,
    MaybeUser(current_user): MaybeUser,
) -> Result<Response, BackendError> {
    let posts = list_posts(&state.db_pool).await?;

    views::page(
        "index.html",
        context! { posts => posts, current_user => current_user },
    )
}
