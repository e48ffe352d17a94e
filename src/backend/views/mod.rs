//! Views Module
//!
//! Server-side page rendering with `minijinja`. Templates are compiled into
//! the binary from the crate's `templates/` directory and loaded into a
//! single process-wide `Environment` on first use. HTML autoescaping is on
//! for every template (they all end in `.html`).
//!
//! # Templates
//!
//! | Name | Rendered by |
//! |---|---|
//! | `index.html` | `GET /` |
//! | `auth/signup.html` | `GET/POST /signup` |
//! | `auth/login.html` | `GET/POST /login` |
//! | `users/user-profile.html` | `GET /userProfile` |
//! | `post/post-form.html` | `GET/POST /post-form` |
//! | `post/post.html` | `GET/POST /post/{id}` |
//! | `error.html` | the generic error handler |

use std::sync::LazyLock;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use minijinja::{context, Environment};
use serde::Serialize;

use crate::backend::error::BackendError;

const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../../../templates/layout.html")),
    ("index.html", include_str!("../../../templates/index.html")),
    ("error.html", include_str!("../../../templates/error.html")),
    ("auth/signup.html", include_str!("../../../templates/auth/signup.html")),
    ("auth/login.html", include_str!("../../../templates/auth/login.html")),
    ("users/user-profile.html", include_str!("../../../templates/users/user-profile.html")),
    ("post/post-form.html", include_str!("../../../templates/post/post-form.html")),
    ("post/post.html", include_str!("../../../templates/post/post.html")),
];

static ENVIRONMENT: LazyLock<Environment<'static>> = LazyLock::new(|| {
    let mut env = Environment::new();
    for &(name, source) in TEMPLATES {
        // A broken template surfaces as a render error for that page only
        if let Err(err) = env.add_template(name, source) {
            tracing::error!("Failed to compile template {}: {}", name, err);
        }
    }
    env
});

/// Render a template to an HTML string
pub fn render<S: Serialize>(name: &str, ctx: S) -> Result<String, minijinja::Error> {
    ENVIRONMENT.get_template(name)?.render(ctx)
}

/// Render a template as a `200 OK` page
pub fn page<S: Serialize>(name: &str, ctx: S) -> Result<Response, BackendError> {
    page_with_status(StatusCode::OK, name, ctx)
}

/// Render a template with an explicit status, e.g. a form re-rendered with an error
pub fn page_with_status<S: Serialize>(
    status: StatusCode,
    name: &str,
    ctx: S,
) -> Result<Response, BackendError> {
    let html = render(name, ctx)?;
    Ok((status, Html(html)).into_response())
}

/// Render the error page
///
/// This cannot fail: if the error template itself does not render, a
/// plain-text body with the same message is returned.
pub fn render_error(status: StatusCode, message: &str) -> Response {
    let ctx = context! {
        status => status.as_u16(),
        reason => status.canonical_reason().unwrap_or("Error"),
        message => message,
    };

    match render("error.html", ctx) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            tracing::error!("Failed to render error page: {}", err);
            (status, message.to_string()).into_response()
        }
    }
}
