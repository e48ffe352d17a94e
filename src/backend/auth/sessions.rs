/**
 * Session Management
 *
 * Server-side sessions keyed by an opaque random token. The token travels
 * in an HttpOnly cookie; the row holds a JSON snapshot of the logged-in
 * user's profile taken at login. Destroying a session deletes the row, so
 * a stale cookie is indistinguishable from no cookie at all.
 */

use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::{DateTime, Duration, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::error::StoreError;
use crate::shared::UserProfile;

/// Session row as stored in the database
#[derive(Debug, Clone, sqlx::FromRow)]
struct SessionRow {
    id: String,
    user_snapshot: String,
    expires_at: DateTime<Utc>,
}

/// A live session
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Opaque token, also the cookie value
    pub token: String,
    /// The user who logged in
    pub user: UserProfile,
    /// When the session stops being accepted
    pub expires_at: DateTime<Utc>,
}

/// Create a session for a user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `user` - Profile snapshot to store
/// * `ttl` - How long the session lives
pub async fn create_session(
    pool: &SqlitePool,
    user: &UserProfile,
    ttl: Duration,
) -> Result<Session, StoreError> {
    let token = Uuid::new_v4().simple().to_string();
    let now = Utc::now();
    let expires_at = now + ttl;
    let snapshot = serde_json::to_string(user)?;

    sqlx::query(
        r#"
        INSERT INTO sessions (id, user_id, user_snapshot, created_at, expires_at)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#
    )
    .bind(&token)
    .bind(user.id)
    .bind(&snapshot)
    .bind(now)
    .bind(expires_at)
    .execute(pool)
    .await?;

    Ok(Session {
        token,
        user: user.clone(),
        expires_at,
    })
}

/// Look up a session by token
///
/// Returns `None` for unknown tokens. Expired sessions are deleted and
/// also return `None`.
pub async fn find_session(pool: &SqlitePool, token: &str) -> Result<Option<Session>, StoreError> {
    let row = sqlx::query_as::<_, SessionRow>(
        r#"
        SELECT id, user_snapshot, expires_at
        FROM sessions
        WHERE id = ?1
        "#
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    if row.expires_at <= Utc::now() {
        tracing::debug!("Session expired at {}", row.expires_at);
        destroy_session(pool, &row.id).await?;
        return Ok(None);
    }

    let user: UserProfile = serde_json::from_str(&row.user_snapshot)?;

    Ok(Some(Session {
        token: row.id,
        user,
        expires_at: row.expires_at,
    }))
}

/// Delete a session and everything stored in it
pub async fn destroy_session(pool: &SqlitePool, token: &str) -> Result<(), StoreError> {
    sqlx::query("DELETE FROM sessions WHERE id = ?1")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(())
}

/// Delete every expired session, returning how many were removed
pub async fn purge_expired_sessions(pool: &SqlitePool) -> Result<u64, StoreError> {
    let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= ?1")
        .bind(Utc::now())
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Build the cookie carrying a session token
pub fn session_cookie(name: &str, session: &Session) -> Cookie<'static> {
    let max_age = (session.expires_at - Utc::now()).num_seconds().max(0);

    Cookie::build((name.to_string(), session.token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(max_age))
        .build()
}

/// Build the cookie used to remove the session cookie from the client
pub fn removal_cookie(name: &str) -> Cookie<'static> {
    Cookie::build((name.to_string(), String::new()))
        .path("/")
        .build()
}
