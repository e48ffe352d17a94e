/**
 * Signup Handlers
 *
 * GET /signup renders the registration form; POST /signup registers a user
 * and logs them in.
 *
 * # Registration Process
 *
 * 1. Read the multipart body, storing the avatar if one was chosen
 * 2. Check that every field is present and the password is strong enough
 * 3. Hash the password with bcrypt
 * 4. Create the user (model validation and uniqueness are checked here)
 * 5. Open a session and redirect to the profile page
 *
 * # Failures
 *
 * Every rejection re-renders the form with a message and keeps the
 * username and email the user typed. The password is never echoed back.
 */

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use minijinja::context;

use crate::backend::auth::handlers::types::{SignupForm, DUPLICATE_USER_MESSAGE};
use crate::backend::auth::password::hash_password;
use crate::backend::auth::sessions::{create_session, session_cookie};
use crate::backend::auth::users::{create_user, NewUser};
use crate::backend::error::{BackendError, StoreError};
use crate::backend::middleware::MaybeUser;
use crate::backend::routes::PROFILE_PATH;
use crate::backend::server::state::AppState;
use crate::backend::uploads::read_multipart_form;
use crate::backend::views;

const TEMPLATE: &str = "auth/signup.html";

/// Multipart file field holding the avatar
pub const AVATAR_FIELD: &str = "avatar";

/// Render the empty signup form
pub async fn signup_form(MaybeUser(current_user): MaybeUser) -> Result<Response, BackendError> {
    views::page(TEMPLATE, context! { current_user => current_user })
}

fn rejected(status: StatusCode, message: &str, form: &SignupForm) -> Result<Response, BackendError> {
    views::page_with_status(
        status,
        TEMPLATE,
        context! {
            error_message => message,
            username => &form.username,
            email => &form.email,
        },
    )
}

/// Sign up handler
///
/// # Arguments
///
/// * `State(state)` - Application state (database, upload store, config)
/// * `jar` - Cookie jar the new session cookie is added to
/// * `multipart` - `username`, `email`, `password` and an optional `avatar` file
///
/// # Returns
///
/// `303 See Other` to `/userProfile` with the session cookie set
///
/// # Errors
///
/// * `422 Unprocessable Entity` - Missing field, weak password or invalid record (form re-rendered)
/// * `409 Conflict` - Username or email already used (form re-rendered)
/// * `500 Internal Server Error` - Hashing, upload or store failure
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    multipart: Multipart,
) -> Result<Response, BackendError> {
    let upload = read_multipart_form::<SignupForm>(multipart, AVATAR_FIELD, state.uploads.as_ref()).await?;
    let form = upload.fields;
    tracing::info!("Signup request: {:?}", form);

    if let Err(e) = form.validate() {
        tracing::warn!("Signup rejected: {}", e);
        return rejected(StatusCode::UNPROCESSABLE_ENTITY, e.user_message(), &form);
    }

    let password_hash = hash_password(&form.password).await?;

    let new_user = NewUser {
        username: form.username.clone(),
        email: form.email.clone(),
        password_hash,
        avatar: upload.file.map(|file| file.public_path),
    };

    let user = match create_user(&state.db_pool, new_user).await {
        Ok(user) => user,
        Err(StoreError::Validation(message)) => {
            tracing::warn!("Signup rejected by the user model: {}", message);
            return rejected(StatusCode::UNPROCESSABLE_ENTITY, &message, &form);
        }
        Err(StoreError::Duplicate(detail)) => {
            tracing::warn!("Signup conflicts with an existing user: {}", detail);
            return rejected(StatusCode::CONFLICT, DUPLICATE_USER_MESSAGE, &form);
        }
        Err(e) => {
            tracing::error!("Failed to create user: {}", e);
            return Err(e.into());
        }
    };

    let session = create_session(&state.db_pool, &user.profile(), state.config.session_ttl()).await?;
    let jar = jar.add(session_cookie(&state.config.session_cookie, &session));

    tracing::info!("User created successfully: {} ({})", user.username, user.email);

    Ok((jar, Redirect::to(PROFILE_PATH)).into_response())
}
