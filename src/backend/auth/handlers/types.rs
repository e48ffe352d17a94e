/**
 * Authentication Handler Types
 *
 * Typed inputs for the signup and login forms. Missing fields deserialize
 * to empty strings so presence is checked by `validate`, which runs before
 * anything touches the store.
 */

use std::fmt;

use serde::Deserialize;

use crate::backend::auth::password::check_password_strength;
use crate::shared::SharedError;

/// Shown when a signup field is missing
pub const MISSING_SIGNUP_FIELDS_MESSAGE: &str =
    "All fields are mandatory. Please provide your username, email and password.";

/// Shown when the username or email is already taken
pub const DUPLICATE_USER_MESSAGE: &str =
    "Username and email need to be unique. Either username or email is already used.";

/// Shown when a login field is missing
pub const MISSING_LOGIN_FIELDS_MESSAGE: &str = "Please enter both, email and password to login.";

/// Shown when no account uses the email
pub const NOT_REGISTERED_MESSAGE: &str = "Email is not registered. Try with other email.";

/// Shown when the password does not match
pub const INCORRECT_PASSWORD_MESSAGE: &str = "Incorrect password.";

/// Sign up form
///
/// The optional avatar arrives as a file part and is handled separately.
#[derive(Deserialize, Default)]
#[serde(default)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SignupForm {
    /// All three fields present, password strong enough
    pub fn validate(&self) -> Result<(), SharedError> {
        for (field, value) in [
            ("username", &self.username),
            ("email", &self.email),
            ("password", &self.password),
        ] {
            if value.is_empty() {
                return Err(SharedError::validation(field, MISSING_SIGNUP_FIELDS_MESSAGE));
            }
        }
        check_password_strength(&self.password)
    }
}

impl fmt::Debug for SignupForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupForm")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Login form
#[derive(Deserialize, Default)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Both fields present
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.email.is_empty() {
            return Err(SharedError::validation("email", MISSING_LOGIN_FIELDS_MESSAGE));
        }
        if self.password.is_empty() {
            return Err(SharedError::validation("password", MISSING_LOGIN_FIELDS_MESSAGE));
        }
        Ok(())
    }
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
