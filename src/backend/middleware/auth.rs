/**
 * Authentication Middleware
 *
 * This module provides the route guard for pages that require a logged-in
 * user. It reads the session cookie, loads the session from the store and
 * attaches a `SessionContext` to the request extensions. Requests without
 * a live session are redirected to the login page before the handler runs.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use crate::backend::auth::sessions::find_session;
use crate::backend::error::{BackendError, StoreError};
use crate::backend::routes::LOGIN_PATH;
use crate::backend::server::state::AppState;
use crate::shared::UserProfile;

/// Per-request authentication context
#[derive(Clone, Debug, PartialEq)]
pub struct SessionContext {
    /// Session token from the cookie
    pub token: String,
    /// Profile snapshot taken at login
    pub user: UserProfile,
}

/// Resolve the session cookie in `jar` to a live session, if any
pub async fn load_session(
    state: &AppState,
    jar: &CookieJar,
) -> Result<Option<SessionContext>, StoreError> {
    let Some(cookie) = jar.get(&state.config.session_cookie) else {
        return Ok(None);
    };

    let session = find_session(&state.db_pool, cookie.value()).await?;

    Ok(session.map(|session| SessionContext {
        token: session.token,
        user: session.user,
    }))
}

/// Route guard
///
/// This middleware:
/// 1. Reads the session cookie
/// 2. Loads the session from the store
/// 3. Attaches the `SessionContext` to request extensions for use in handlers
///
/// Redirects to `/login` if the cookie is missing, unknown or expired.
pub async fn require_session(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    match load_session(&state, &jar).await {
        Ok(Some(context)) => {
            request.extensions_mut().insert(context);
            next.run(request).await
        }
        Ok(None) => {
            tracing::warn!("Unauthenticated request to {}", request.uri().path());
            Redirect::to(LOGIN_PATH).into_response()
        }
        Err(e) => BackendError::from(e).into_response(),
    }
}

/// Axum extractor for the authenticated user
///
/// Only valid on routes behind `require_session`; elsewhere it redirects to
/// the login page.
#[derive(Clone, Debug)]
pub struct AuthUser(pub SessionContext);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let context = parts
            .extensions
            .get::<SessionContext>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("SessionContext not found in request extensions");
                Redirect::to(LOGIN_PATH)
            })?;

        Ok(AuthUser(context))
    }
}

/// Axum extractor for pages that render for everyone but greet logged-in users
#[derive(Clone, Debug)]
pub struct MaybeUser(pub Option<UserProfile>);

impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        if let Some(context) = parts.extensions.get::<SessionContext>() {
            return Ok(MaybeUser(Some(context.user.clone())));
        }

        let jar = CookieJar::from_headers(&parts.headers);
        let context = load_session(state, &jar).await?;

        Ok(MaybeUser(context.map(|context| context.user)))
    }
}
