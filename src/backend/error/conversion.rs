/**
 * Error Conversion
 *
 * This module converts backend errors into HTTP responses. It is the
 * generic error handler for every route: the error is logged once, and the
 * user gets the `error.html` page with the status from
 * `BackendError::status_code` and the message from `BackendError::message`.
 */

use axum::response::{IntoResponse, Response};
use crate::backend::error::types::BackendError;
use crate::backend::views;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Request failed with {}: {}", status, self);
        } else {
            tracing::warn!("Request rejected with {}: {}", status, self);
        }

        views::render_error(status, &self.message())
    }
}
