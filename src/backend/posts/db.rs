/**
 * Post Model and Database Operations
 *
 * Posts reference their creator by id and keep an ordered list of comment
 * references in `post_comments`. Reads come in two shapes: the bare `Post`
 * (ids only) and the expanded `PostDetail` with creator and comment authors
 * joined in.
 */

use chrono::{DateTime, Utc};
use sqlx::{SqliteConnection, SqlitePool};
use uuid::Uuid;

use crate::backend::error::StoreError;
use crate::shared::{CommentDetail, PostDetail, PostSummary, UserProfile};

/// A post with its comment list as ids
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: Uuid,
    pub content: String,
    pub pic_name: Option<String>,
    /// Public path of the uploaded picture
    pub pic_path: Option<String>,
    pub creator_id: Uuid,
    /// Comment ids in the order they were appended
    pub comments: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, sqlx::FromRow)]
struct PostRow {
    id: Uuid,
    content: String,
    pic_name: Option<String>,
    pic_path: Option<String>,
    creator_id: Uuid,
    created_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self, comments: Vec<Uuid>) -> Post {
        Post {
            id: self.id,
            content: self.content,
            pic_name: self.pic_name,
            pic_path: self.pic_path,
            creator_id: self.creator_id,
            comments,
            created_at: self.created_at,
        }
    }
}

/// A post about to be created
#[derive(Debug, Clone)]
pub struct NewPost {
    pub content: String,
    pub pic_name: Option<String>,
    pub pic_path: Option<String>,
    pub creator_id: Uuid,
}

impl NewPost {
    /// Content must be non-blank; a blank picture name is dropped
    pub fn validate(self) -> Result<Self, StoreError> {
        if self.content.trim().is_empty() {
            return Err(StoreError::Validation(
                "Post validation failed: content: Content is required.".to_string(),
            ));
        }

        Ok(Self {
            pic_name: self
                .pic_name
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty()),
            ..self
        })
    }
}

/// Create a new post
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `new_post` - The post to create; validated before insert
///
/// # Returns
/// Created post with an empty comment list
pub async fn create_post(pool: &SqlitePool, new_post: NewPost) -> Result<Post, StoreError> {
    let new_post = new_post.validate()?;

    let row = sqlx::query_as::<_, PostRow>(
        r#"
        INSERT INTO posts (id, content, pic_name, pic_path, creator_id, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        RETURNING id, content, pic_name, pic_path, creator_id, created_at
        "#
    )
    .bind(Uuid::new_v4())
    .bind(&new_post.content)
    .bind(&new_post.pic_name)
    .bind(&new_post.pic_path)
    .bind(new_post.creator_id)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(row.into_post(Vec::new()))
}

/// Load a post and its comment ids on an existing connection
///
/// Used inside transactions so the read sees the transaction's own writes.
pub async fn fetch_post(conn: &mut SqliteConnection, id: Uuid) -> Result<Option<Post>, StoreError> {
    let row = sqlx::query_as::<_, PostRow>(
        r#"
        SELECT id, content, pic_name, pic_path, creator_id, created_at
        FROM posts
        WHERE id = ?1
        "#
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let comments: Vec<Uuid> = sqlx::query_scalar(
        "SELECT comment_id FROM post_comments WHERE post_id = ?1 ORDER BY position",
    )
    .bind(id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(Some(row.into_post(comments)))
}

/// Get post by ID
pub async fn get_post_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<Post>, StoreError> {
    let mut conn = pool.acquire().await?;
    fetch_post(&mut conn, id).await
}

#[derive(Debug, sqlx::FromRow)]
struct PostDetailRow {
    id: Uuid,
    content: String,
    pic_name: Option<String>,
    pic_path: Option<String>,
    created_at: DateTime<Utc>,
    creator_id: Uuid,
    creator_username: String,
    creator_email: String,
    creator_avatar: Option<String>,
}

#[derive(Debug, sqlx::FromRow)]
struct CommentDetailRow {
    id: Uuid,
    content: String,
    image_name: Option<String>,
    image_path: Option<String>,
    post_id: Uuid,
    created_at: DateTime<Utc>,
    author_id: Uuid,
    author_username: String,
    author_email: String,
    author_avatar: Option<String>,
}

impl From<CommentDetailRow> for CommentDetail {
    fn from(row: CommentDetailRow) -> Self {
        CommentDetail {
            id: row.id,
            content: row.content,
            image_name: row.image_name,
            image_path: row.image_path,
            post_id: row.post_id,
            author: UserProfile {
                id: row.author_id,
                username: row.author_username,
                email: row.author_email,
                avatar: row.author_avatar,
            },
            created_at: row.created_at,
        }
    }
}

/// Load a post with its creator and every comment's author expanded
///
/// Comments come back in append order.
pub async fn get_post_detail(pool: &SqlitePool, id: Uuid) -> Result<Option<PostDetail>, StoreError> {
    let row = sqlx::query_as::<_, PostDetailRow>(
        r#"
        SELECT p.id, p.content, p.pic_name, p.pic_path, p.created_at,
               u.id AS creator_id, u.username AS creator_username,
               u.email AS creator_email, u.avatar AS creator_avatar
        FROM posts p
        JOIN users u ON u.id = p.creator_id
        WHERE p.id = ?1
        "#
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let comments = sqlx::query_as::<_, CommentDetailRow>(
        r#"
        SELECT c.id, c.content, c.image_name, c.image_path, c.post_id, c.created_at,
               u.id AS author_id, u.username AS author_username,
               u.email AS author_email, u.avatar AS author_avatar
        FROM post_comments pc
        JOIN comments c ON c.id = pc.comment_id
        JOIN users u ON u.id = c.author_id
        WHERE pc.post_id = ?1
        ORDER BY pc.position
        "#
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    Ok(Some(PostDetail {
        id: row.id,
        content: row.content,
        pic_name: row.pic_name,
        pic_path: row.pic_path,
        creator: UserProfile {
            id: row.creator_id,
            username: row.creator_username,
            email: row.creator_email,
            avatar: row.creator_avatar,
        },
        comments: comments.into_iter().map(CommentDetail::from).collect(),
        created_at: row.created_at,
    }))
}

#[derive(Debug, sqlx::FromRow)]
struct PostSummaryRow {
    id: Uuid,
    content: String,
    pic_name: Option<String>,
    pic_path: Option<String>,
    created_at: DateTime<Utc>,
    comment_count: i64,
    creator_id: Uuid,
    creator_username: String,
    creator_email: String,
    creator_avatar: Option<String>,
}

/// List every post, newest first, with its creator and comment count
pub async fn list_posts(pool: &SqlitePool) -> Result<Vec<PostSummary>, StoreError> {
    let rows = sqlx::query_as::<_, PostSummaryRow>(
        r#"
        SELECT p.id, p.content, p.pic_name, p.pic_path, p.created_at,
               (SELECT COUNT(*) FROM post_comments pc WHERE pc.post_id = p.id) AS comment_count,
               u.id AS creator_id, u.username AS creator_username,
               u.email AS creator_email, u.avatar AS creator_avatar
        FROM posts p
        JOIN users u ON u.id = p.creator_id
        ORDER BY p.created_at DESC, p.rowid DESC
        "#
    )
    .fetch_all(pool)
    .await?;

    let posts = rows
        .into_iter()
        .map(|row| PostSummary {
            id: row.id,
            content: row.content,
            pic_name: row.pic_name,
            pic_path: row.pic_path,
            creator: UserProfile {
                id: row.creator_id,
                username: row.creator_username,
                email: row.creator_email,
                avatar: row.creator_avatar,
            },
            comment_count: row.comment_count,
            created_at: row.created_at,
        })
        .collect();

    Ok(posts)
}
