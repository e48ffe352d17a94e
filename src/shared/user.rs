//! User Profile
//!
//! The public face of a user account: everything except the password hash.
//! It is what the session snapshots at login and what post and comment
//! references expand to.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user record without credentials
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    /// Unique user ID
    pub id: Uuid,
    /// Username (unique)
    pub username: String,
    /// Email address (unique, lower-cased)
    pub email: String,
    /// Public path of the uploaded avatar, if one was provided at signup
    pub avatar: Option<String>,
}
