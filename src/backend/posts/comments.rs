/**
 * Comment Model and Database Operations
 *
 * A comment is written together with its reference on the post's comment
 * list. Both happen in one transaction, so a comment never exists without
 * its entry in `post_comments`.
 */

use chrono::{DateTime, Utc};
use sqlx::{SqliteConnection, SqlitePool};
use uuid::Uuid;

use super::db::{fetch_post, Post};
use crate::backend::error::StoreError;

/// Comment struct representing a comment in the database
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub content: String,
    pub image_name: Option<String>,
    /// Public path of the uploaded image
    pub image_path: Option<String>,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// A comment about to be created
#[derive(Debug, Clone)]
pub struct NewComment {
    pub content: String,
    pub image_name: Option<String>,
    pub image_path: Option<String>,
    pub post_id: Uuid,
    pub author_id: Uuid,
}

impl NewComment {
    /// Content must be non-blank; a blank image name is dropped
    pub fn validate(self) -> Result<Self, StoreError> {
        if self.content.trim().is_empty() {
            return Err(StoreError::Validation(
                "Comment validation failed: content: Content is required.".to_string(),
            ));
        }

        Ok(Self {
            image_name: self
                .image_name
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty()),
            ..self
        })
    }
}

/// Insert a comment row
///
/// Does not touch the post's comment list; see `add_comment_to_post`.
pub async fn create_comment(
    conn: &mut SqliteConnection,
    new_comment: NewComment,
) -> Result<Comment, StoreError> {
    let new_comment = new_comment.validate()?;

    let comment = sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (id, content, image_name, image_path, post_id, author_id, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        RETURNING id, content, image_name, image_path, post_id, author_id, created_at
        "#
    )
    .bind(Uuid::new_v4())
    .bind(&new_comment.content)
    .bind(&new_comment.image_name)
    .bind(&new_comment.image_path)
    .bind(new_comment.post_id)
    .bind(new_comment.author_id)
    .bind(Utc::now())
    .fetch_one(&mut *conn)
    .await?;

    Ok(comment)
}

/// Append a comment id to the end of a post's comment list
///
/// # Returns
/// The post as it is after the append
pub async fn push_comment(
    conn: &mut SqliteConnection,
    post_id: Uuid,
    comment_id: Uuid,
) -> Result<Post, StoreError> {
    sqlx::query(
        r#"
        INSERT INTO post_comments (post_id, position, comment_id)
        VALUES (
            ?1,
            (SELECT COALESCE(MAX(position), -1) + 1 FROM post_comments WHERE post_id = ?1),
            ?2
        )
        "#
    )
    .bind(post_id)
    .bind(comment_id)
    .execute(&mut *conn)
    .await?;

    fetch_post(conn, post_id)
        .await?
        .ok_or_else(|| StoreError::not_found("Post"))
}

/// Create a comment and append it to its post
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `new_comment` - The comment; `post_id` names the target post
///
/// # Returns
/// The created comment and the updated post, or `StoreError::NotFound` if
/// the post does not exist. Nothing is written on failure.
///
/// The transaction takes the write lock up front (`BEGIN IMMEDIATE`). A
/// deferred one would read the post first and then fail with
/// `SQLITE_BUSY` when another writer commits before its upgrade.
pub async fn add_comment_to_post(
    pool: &SqlitePool,
    new_comment: NewComment,
) -> Result<(Comment, Post), StoreError> {
    let mut tx = pool.begin_with("BEGIN IMMEDIATE").await?;

    if fetch_post(&mut *tx, new_comment.post_id).await?.is_none() {
        return Err(StoreError::not_found("Post"));
    }

    let comment = create_comment(&mut *tx, new_comment).await?;
    let post = push_comment(&mut *tx, comment.post_id, comment.id).await?;

    tx.commit().await?;

    Ok((comment, post))
}
