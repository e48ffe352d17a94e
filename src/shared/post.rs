//! Post and Comment Views
//!
//! Read models for posts with their references expanded. A `PostDetail`
//! carries its creator and every comment, and each comment carries its
//! author, so templates never see a bare user id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::user::UserProfile;

/// A comment with its author expanded
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommentDetail {
    pub id: Uuid,
    pub content: String,
    pub image_name: Option<String>,
    pub image_path: Option<String>,
    pub post_id: Uuid,
    pub author: UserProfile,
    pub created_at: DateTime<Utc>,
}

/// A post with its creator and comment list expanded
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostDetail {
    pub id: Uuid,
    pub content: String,
    pub pic_name: Option<String>,
    pub pic_path: Option<String>,
    pub creator: UserProfile,
    /// Comments in the order they were appended
    pub comments: Vec<CommentDetail>,
    pub created_at: DateTime<Utc>,
}

/// A post as listed on the home page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostSummary {
    pub id: Uuid,
    pub content: String,
    pub pic_name: Option<String>,
    pub pic_path: Option<String>,
    pub creator: UserProfile,
    pub comment_count: i64,
    pub created_at: DateTime<Utc>,
}
