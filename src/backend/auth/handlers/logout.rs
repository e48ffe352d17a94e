/**
 * Logout Handler
 *
 * POST /logout deletes the session row and expires the cookie, then
 * redirects home.
 */

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use crate::backend::auth::sessions::{destroy_session, removal_cookie};
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::routes::ROOT_PATH;
use crate::backend::server::state::AppState;

/// Logout handler
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
    AuthUser(session): AuthUser,
) -> Result<Response, BackendError> {
    destroy_session(&state.db_pool, &session.token).await?;
    let jar = jar.remove(removal_cookie(&state.config.session_cookie));

    tracing::info!("User logged out: {}", session.user.username);

    Ok((jar, Redirect::to(ROOT_PATH)).into_response())
}
