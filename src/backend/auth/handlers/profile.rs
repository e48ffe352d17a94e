/**
 * Profile Handler
 *
 * GET /userProfile renders the logged-in user's profile from the session
 * snapshot. No store lookup happens here.
 */

use axum::response::Response;
use minijinja::context;

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::views;

/// Profile page handler
pub async fn user_profile(AuthUser(session): AuthUser) -> Result<Response, BackendError> {
    views::page(
        "users/user-profile.html",
        context! { current_user => session.user },
    )
}
