/**
 * User Model and Database Operations
 *
 * This module handles user records and their database operations. A
 * `NewUser` is validated and normalized before insert; username and email
 * uniqueness is enforced by the table's unique indexes and surfaces as
 * `StoreError::Duplicate`.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::error::StoreError;
use crate::shared::UserProfile;

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Username (unique, trimmed)
    pub username: String,
    /// User email address (unique, trimmed and lower-cased)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Public path of the uploaded avatar
    pub avatar: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// The user without credentials
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

/// A user about to be created
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub avatar: Option<String>,
}

impl NewUser {
    /// Apply the model rules and return the normalized record
    ///
    /// Username is trimmed, email is trimmed and lower-cased. Both must be
    /// non-blank and the email must look like `local@domain.tld`.
    pub fn validate(self) -> Result<Self, StoreError> {
        let username = self.username.trim().to_string();
        let email = normalize_email(&self.email);

        if username.is_empty() {
            return Err(validation_error("username", "Username is required."));
        }
        if email.is_empty() {
            return Err(validation_error("email", "Email is required."));
        }
        if !is_valid_email(&email) {
            return Err(validation_error("email", "Please use a valid email address."));
        }
        if self.password_hash.is_empty() {
            return Err(validation_error("passwordHash", "Password hash is required."));
        }

        Ok(Self {
            username,
            email,
            password_hash: self.password_hash,
            avatar: self.avatar,
        })
    }
}

fn validation_error(field: &str, reason: &str) -> StoreError {
    StoreError::Validation(format!("User validation failed: {}: {}", field, reason))
}

/// Normalize an email the way it is stored
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// `local@domain.tld` with no whitespace anywhere
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };

    !local.is_empty()
        && domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `new_user` - The user to create; validated before insert
///
/// # Returns
/// Created user, `StoreError::Validation` if a model rule fails, or
/// `StoreError::Duplicate` if the username or email is taken
pub async fn create_user(pool: &SqlitePool, new_user: NewUser) -> Result<User, StoreError> {
    let new_user = new_user.validate()?;
    let id = Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, username, email, password_hash, avatar, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        RETURNING id, username, email, password_hash, avatar, created_at
        "#
    )
    .bind(id)
    .bind(&new_user.username)
    .bind(&new_user.email)
    .bind(&new_user.password_hash)
    .bind(&new_user.avatar)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email
///
/// The email is normalized before the lookup.
pub async fn get_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<User>, StoreError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password_hash, avatar, created_at
        FROM users
        WHERE email = ?1
        "#
    )
    .bind(normalize_email(email))
    .fetch_optional(pool)
    .await?;

    Ok(user)
}
