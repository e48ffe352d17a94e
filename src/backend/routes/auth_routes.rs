/**
 * Authentication Routes
 *
 * - `GET/POST /signup` - Registration
 * - `GET/POST /login` - Login
 * - `POST /logout` - Logout (guarded)
 * - `GET /userProfile` - Profile (guarded)
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{login, login_form, logout, signup, signup_form, user_profile};
use crate::backend::middleware::require_session;
use crate::backend::routes::{LOGIN_PATH, LOGOUT_PATH, PROFILE_PATH, SIGNUP_PATH};
use crate::backend::server::state::AppState;

/// Configure authentication routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `state` - Application state, needed by the session guard
///
/// # Returns
///
/// Router with authentication routes configured
pub fn configure_auth_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    let public = Router::new()
        .route(SIGNUP_PATH, get(signup_form).post(signup))
        .route(LOGIN_PATH, get(login_form).post(login));

    let guarded = Router::new()
        .route(LOGOUT_PATH, post(logout))
        .route(PROFILE_PATH, get(user_profile))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_session));

    router.merge(public).merge(guarded)
}
