//! User and post fixtures
//!
//! Helpers that drive the real pages (signup, login, post form) so tests
//! start from the same state a browser would produce.

use axum_test::multipart::{MultipartForm, Part};
use axum_test::{TestResponse, TestServer};
use sqlx::SqlitePool;
use uuid::Uuid;

/// A password that satisfies the strength rule
pub const GOOD_PASSWORD: &str = "Abc123";

/// Build a signup form without an avatar
pub fn signup_form(username: &str, email: &str, password: &str) -> MultipartForm {
    MultipartForm::new()
        .add_text("username", username.to_string())
        .add_text("email", email.to_string())
        .add_text("password", password.to_string())
}

/// Submit the signup form
pub async fn submit_signup(server: &TestServer, username: &str, email: &str, password: &str) -> TestResponse {
    server
        .post("/signup")
        .multipart(signup_form(username, email, password))
        .await
}

/// Submit the login form
pub async fn submit_login(server: &TestServer, email: &str, password: &str) -> TestResponse {
    server
        .post("/login")
        .form(&[("email", email), ("password", password)])
        .await
}

/// Register `username` and stay logged in as them
pub async fn register(server: &TestServer, username: &str) {
    let response = submit_signup(server, username, &format!("{}@example.com", username), GOOD_PASSWORD).await;
    crate::common::assert_redirect(&response, "/userProfile");
}

/// Publish a post as the logged-in user and return its id
pub async fn publish_post(server: &TestServer, pool: &SqlitePool, content: &str) -> Uuid {
    let response = server
        .post("/post-form")
        .multipart(MultipartForm::new().add_text("content", content.to_string()).add_text("picName", ""))
        .await;
    crate::common::assert_redirect(&response, "/");

    sqlx::query_scalar("SELECT id FROM posts WHERE content = ?1")
        .bind(content)
        .fetch_one(pool)
        .await
        .expect("Published post not found")
}

/// A small PNG-looking upload
pub fn image_part(file_name: &str) -> Part {
    Part::bytes(b"\x89PNG\r\n\x1a\nfake".to_vec())
        .file_name(file_name.to_string())
        .mime_type("image/png")
}

/// Number of rows in `table`
pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .expect("Failed to count rows")
}
