/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Authentication routes (signup, login, logout, profile)
 * 2. Post routes (home, post form, post detail, comments)
 * 3. Uploaded files under the upload URL prefix
 * 4. Fallback handler (404 error page)
 */

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::routes::auth_routes::configure_auth_routes;
use crate::backend::routes::post_routes::configure_post_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the pool, upload store and config
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Layers
///
/// Request bodies are capped at `max_upload_bytes` and every request is
/// traced with `TraceLayer`.
pub fn create_router(app_state: AppState) -> Router<()> {
    let config = app_state.config.clone();

    let router = configure_auth_routes(Router::new(), &app_state);
    let router = configure_post_routes(router, &app_state);

    // Uploaded avatars and pictures
    let router = router.nest_service(
        &config.upload_url_prefix,
        ServeDir::new(&config.upload_dir),
    );

    let router = router.fallback(not_found);

    router
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn not_found() -> BackendError {
    BackendError::not_found()
}
