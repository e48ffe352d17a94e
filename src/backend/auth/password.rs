/**
 * Password Hashing and Policy
 *
 * Wraps bcrypt with the fixed work factor used for every stored digest and
 * holds the password strength rule applied at signup. Hashing runs on the
 * blocking thread pool so a request never stalls the async workers.
 */

use bcrypt::{hash, verify};

use crate::backend::error::BackendError;
use crate::shared::SharedError;

/// bcrypt work factor
pub const PASSWORD_HASH_COST: u32 = 10;

/// Minimum password length, in characters
pub const MIN_PASSWORD_LEN: usize = 6;

/// Message shown when a password fails the strength rule
pub const WEAK_PASSWORD_MESSAGE: &str =
    "Password needs to have at least 6 chars and must contain at least one number, one lowercase and one uppercase letter.";

/// Check the password strength rule
///
/// A password must be at least `MIN_PASSWORD_LEN` characters long and
/// contain at least one ASCII digit, one lowercase and one uppercase ASCII
/// letter.
pub fn check_password_strength(password: &str) -> Result<(), SharedError> {
    let long_enough = password.chars().count() >= MIN_PASSWORD_LEN;
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());

    if long_enough && has_digit && has_lower && has_upper {
        Ok(())
    } else {
        Err(SharedError::validation("password", WEAK_PASSWORD_MESSAGE))
    }
}

/// Hash a password with a fresh salt
pub async fn hash_password(password: &str) -> Result<String, BackendError> {
    let password = password.to_string();
    let digest = tokio::task::spawn_blocking(move || hash(password, PASSWORD_HASH_COST)).await??;
    Ok(digest)
}

/// Compare a password against a stored digest
pub async fn verify_password(password: &str, password_hash: &str) -> Result<bool, BackendError> {
    let password = password.to_string();
    let password_hash = password_hash.to_string();
    let matches = tokio::task::spawn_blocking(move || verify(password, &password_hash)).await??;
    Ok(matches)
}
