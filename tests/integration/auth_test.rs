//! Authentication integration tests
//!
//! Signup and login through the real router, checked against the database.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use postboard::backend::auth::password::{verify_password, WEAK_PASSWORD_MESSAGE};
use postboard::backend::auth::users::get_user_by_email;

use crate::assert_ok;
use crate::common::*;

const MISSING_FIELDS: &str = "All fields are mandatory. Please provide your username, email and password.";

#[tokio::test]
async fn test_signup_form_renders() {
    let app = spawn_app().await;

    let response = app.server.get("/signup").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("name=\"username\""));
}

#[tokio::test]
async fn test_signup_with_missing_field_creates_nothing() {
    let app = spawn_app().await;

    for (username, email, password) in [
        ("", "alice@example.com", GOOD_PASSWORD),
        ("alice", "", GOOD_PASSWORD),
        ("alice", "alice@example.com", ""),
    ] {
        let response = submit_signup(&app.server, username, email, password).await;
        assert_page_error(&response, StatusCode::UNPROCESSABLE_ENTITY, MISSING_FIELDS);
    }

    assert_eq!(count_rows(&app.pool, "users").await, 0);
}

#[tokio::test]
async fn test_signup_with_weak_password_creates_nothing() {
    let app = spawn_app().await;

    for password in ["abcdef", "ABCDEF", "123456", "Ab1"] {
        let response = submit_signup(&app.server, "alice", "alice@example.com", password).await;
        assert_page_error(&response, StatusCode::UNPROCESSABLE_ENTITY, WEAK_PASSWORD_MESSAGE);
    }

    assert_eq!(count_rows(&app.pool, "users").await, 0);
}

#[tokio::test]
async fn test_signup_refills_fields_but_not_password() {
    let app = spawn_app().await;

    let response = submit_signup(&app.server, "alice", "alice@example.com", "Secretpassword").await;

    let body = response.text();
    assert!(body.contains("value=\"alice\""));
    assert!(!body.contains("Secretpassword"));
}

#[tokio::test]
async fn test_signup_creates_user_with_hashed_password() {
    let app = spawn_app().await;

    let response = submit_signup(&app.server, "alice", "Alice@Example.com", GOOD_PASSWORD).await;
    assert_redirect(&response, "/userProfile");

    assert_eq!(count_rows(&app.pool, "users").await, 1);
    let user = assert_ok!(get_user_by_email(&app.pool, "alice@example.com").await).unwrap();
    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.avatar, None);
    assert_ne!(user.password_hash, GOOD_PASSWORD);
    assert!(assert_ok!(verify_password(GOOD_PASSWORD, &user.password_hash).await));
}

#[tokio::test]
async fn test_signup_logs_the_user_in() {
    let app = spawn_app().await;
    register(&app.server, "alice").await;

    let response = app.server.get("/userProfile").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("Welcome, alice"));
}

#[tokio::test]
async fn test_signup_stores_avatar() {
    let app = spawn_app().await;

    let form = signup_form("alice", "alice@example.com", GOOD_PASSWORD).add_part("avatar", image_part("me.PNG"));
    let response = app.server.post("/signup").multipart(form).await;
    assert_redirect(&response, "/userProfile");

    let user = assert_ok!(get_user_by_email(&app.pool, "alice@example.com").await).unwrap();
    let avatar = user.avatar.expect("avatar path stored");
    assert!(avatar.starts_with("/avatar/"));
    assert!(avatar.ends_with(".png"));

    let filename = avatar.trim_start_matches("/avatar/");
    assert!(app.upload_dir.path().join(filename).exists());

    let served = app.server.get(&avatar).await;
    assert_eq!(served.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let app = spawn_app().await;
    submit_signup(&app.server, "alice", "alice@example.com", GOOD_PASSWORD).await;

    let response = submit_signup(&app.server, "alice2", "alice@example.com", GOOD_PASSWORD).await;

    assert_page_error(
        &response,
        StatusCode::CONFLICT,
        "Username and email need to be unique. Either username or email is already used.",
    );
    assert_eq!(count_rows(&app.pool, "users").await, 1);
}

#[tokio::test]
async fn test_duplicate_username_is_rejected() {
    let app = spawn_app().await;
    submit_signup(&app.server, "alice", "alice@example.com", GOOD_PASSWORD).await;

    let response = submit_signup(&app.server, "alice", "other@example.com", GOOD_PASSWORD).await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    assert_eq!(count_rows(&app.pool, "users").await, 1);
}

#[tokio::test]
async fn test_invalid_email_shows_model_message() {
    let app = spawn_app().await;

    let response = submit_signup(&app.server, "alice", "not-an-email", GOOD_PASSWORD).await;

    assert_page_error(&response, StatusCode::UNPROCESSABLE_ENTITY, "User validation failed: email");
    assert_eq!(count_rows(&app.pool, "users").await, 0);
}

#[tokio::test]
async fn test_login_with_empty_fields() {
    let app = spawn_app().await;

    let response = submit_login(&app.server, "alice@example.com", "").await;

    assert_page_error(
        &response,
        StatusCode::UNPROCESSABLE_ENTITY,
        "Please enter both, email and password to login.",
    );
    assert_eq!(count_rows(&app.pool, "sessions").await, 0);
}

#[tokio::test]
async fn test_login_with_unknown_email() {
    let app = spawn_app().await;

    let response = submit_login(&app.server, "nobody@example.com", GOOD_PASSWORD).await;

    assert_page_error(
        &response,
        StatusCode::UNAUTHORIZED,
        "Email is not registered. Try with other email.",
    );
    assert_eq!(count_rows(&app.pool, "sessions").await, 0);
}

#[tokio::test]
async fn test_login_with_correct_password() {
    let app = spawn_app().await;
    submit_signup(&app.server, "alice", "alice@example.com", GOOD_PASSWORD).await;
    app.server.post("/logout").await;
    assert_eq!(count_rows(&app.pool, "sessions").await, 0);

    let response = submit_login(&app.server, "  ALICE@example.com ", GOOD_PASSWORD).await;
    assert_redirect(&response, "/userProfile");

    let snapshot: String = assert_ok!(
        sqlx::query_scalar("SELECT user_snapshot FROM sessions")
            .fetch_one(&app.pool)
            .await
    );
    assert!(snapshot.contains("\"username\":\"alice\""));
    assert!(!snapshot.contains("password"));

    let profile = app.server.get("/userProfile").await;
    assert_eq!(profile.status_code(), StatusCode::OK);
    assert!(profile.text().contains("alice@example.com"));
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    let app = spawn_app().await;
    submit_signup(&app.server, "alice", "alice@example.com", GOOD_PASSWORD).await;
    app.server.post("/logout").await;

    let response = submit_login(&app.server, "alice@example.com", "Wrong123").await;

    assert_page_error(&response, StatusCode::UNAUTHORIZED, "Incorrect password.");
    assert_eq!(count_rows(&app.pool, "sessions").await, 0);

    let profile = app.server.get("/userProfile").await;
    assert_redirect(&profile, "/login");
}

#[tokio::test]
async fn test_login_replaces_previous_session() {
    let app = spawn_app().await;
    submit_signup(&app.server, "alice", "alice@example.com", GOOD_PASSWORD).await;
    assert_eq!(count_rows(&app.pool, "sessions").await, 1);

    let response = submit_login(&app.server, "alice@example.com", GOOD_PASSWORD).await;

    assert_redirect(&response, "/userProfile");
    assert_eq!(count_rows(&app.pool, "sessions").await, 1);
}
