/**
 * Post Routes
 *
 * - `GET /` - Home page
 * - `GET/POST /post-form` - Create a post (guarded)
 * - `GET/POST /post/{id}` - Post detail and comments (guarded)
 */

use axum::{middleware, routing::get, Router};

use crate::backend::middleware::require_session;
use crate::backend::posts::handlers::{home, post_form, show_post, submit_comment, submit_post};
use crate::backend::routes::{POST_FORM_PATH, POST_PATH, ROOT_PATH};
use crate::backend::server::state::AppState;

/// Configure post routes
pub fn configure_post_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    let guarded = Router::new()
        .route(POST_FORM_PATH, get(post_form).post(submit_post))
        .route(POST_PATH, get(show_post).post(submit_comment))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_session));

    router.route(ROOT_PATH, get(home)).merge(guarded)
}
