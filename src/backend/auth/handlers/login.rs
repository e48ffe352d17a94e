/**
 * Login Handlers
 *
 * GET /login renders the login form; POST /login checks the credentials
 * and opens a session.
 *
 * # Authentication Process
 *
 * 1. Check that email and password are both present
 * 2. Look up the user by (normalized) email
 * 3. Verify the password against the bcrypt hash
 * 4. Replace any previous session with a fresh one
 * 5. Redirect to the profile page
 */

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::CookieJar;
use minijinja::context;

use crate::backend::auth::handlers::types::{
    LoginForm, INCORRECT_PASSWORD_MESSAGE, NOT_REGISTERED_MESSAGE,
};
use crate::backend::auth::password::verify_password;
use crate::backend::auth::sessions::{create_session, destroy_session, session_cookie};
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::BackendError;
use crate::backend::middleware::MaybeUser;
use crate::backend::routes::PROFILE_PATH;
use crate::backend::server::state::AppState;
use crate::backend::views;

const TEMPLATE: &str = "auth/login.html";

/// Render the empty login form
pub async fn login_form(MaybeUser(current_user): MaybeUser) -> Result<Response, BackendError> {
    views::page(TEMPLATE, context! { current_user => current_user })
}

fn rejected(status: StatusCode, message: &str, email: &str) -> Result<Response, BackendError> {
    views::page_with_status(
        status,
        TEMPLATE,
        context! { error_message => message, email => email },
    )
}

/// Login handler
///
/// # Arguments
///
/// * `State(state)` - Application state (database, config)
/// * `jar` - Cookie jar; an existing session cookie is replaced
/// * `Form(form)` - Email and password
///
/// # Returns
///
/// `303 See Other` to `/userProfile` with the session cookie set
///
/// # Errors
///
/// * `422 Unprocessable Entity` - A field is empty (form re-rendered)
/// * `401 Unauthorized` - Unknown email or wrong password (form re-rendered)
/// * `500 Internal Server Error` - Store or hashing failure
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, BackendError> {
    tracing::info!("Login request: {:?}", form);

    if let Err(e) = form.validate() {
        tracing::warn!("Login rejected: {}", e);
        return rejected(StatusCode::UNPROCESSABLE_ENTITY, e.user_message(), &form.email);
    }

    let Some(user) = get_user_by_email(&state.db_pool, &form.email).await? else {
        tracing::warn!("Login for unregistered email: {}", form.email);
        return rejected(StatusCode::UNAUTHORIZED, NOT_REGISTERED_MESSAGE, &form.email);
    };

    if !verify_password(&form.password, &user.password_hash).await? {
        tracing::warn!("Invalid password for user: {}", user.username);
        return rejected(StatusCode::UNAUTHORIZED, INCORRECT_PASSWORD_MESSAGE, &form.email);
    }

    if let Some(previous) = jar.get(&state.config.session_cookie) {
        destroy_session(&state.db_pool, previous.value()).await?;
    }

    let session = create_session(&state.db_pool, &user.profile(), state.config.session_ttl()).await?;
    let jar = jar.add(session_cookie(&state.config.session_cookie, &session));

    tracing::info!("User logged in successfully: {} ({})", user.username, user.email);

    Ok((jar, Redirect::to(PROFILE_PATH)).into_response())
}
