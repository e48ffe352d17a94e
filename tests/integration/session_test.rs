//! Session and route guard integration tests

use axum::http::StatusCode;
use axum_extra::extract::cookie::Cookie;
use axum_test::TestResponse;
use pretty_assertions::assert_eq;

use crate::common::*;

const GUARDED_GETS: [&str; 2] = ["/userProfile", "/post-form"];

fn assert_rejected(response: &TestResponse) {
    assert_redirect(response, "/login");
}

#[tokio::test]
async fn test_guarded_pages_redirect_anonymous_clients() {
    let app = spawn_app().await;

    for path in GUARDED_GETS {
        assert_rejected(&app.server.get(path).await);
    }
    assert_rejected(&app.server.post("/logout").await);
}

#[tokio::test]
async fn test_logout_clears_session() {
    let app = spawn_app().await;
    register(&app.server, "alice").await;
    assert_eq!(app.server.get("/userProfile").await.status_code(), StatusCode::OK);

    let response = app.server.post("/logout").await;

    assert_redirect(&response, "/");
    assert_eq!(count_rows(&app.pool, "sessions").await, 0);
    for path in GUARDED_GETS {
        assert_rejected(&app.server.get(path).await);
    }
}

#[tokio::test]
async fn test_stale_cookie_after_logout_is_rejected() {
    let app = spawn_app().await;
    let signup = submit_signup(&app.server, "alice", "alice@example.com", GOOD_PASSWORD).await;
    let stale = signup.cookie(TEST_SESSION_COOKIE);

    app.server.post("/logout").await;

    let response = app.server.get("/userProfile").add_cookie(stale).await;
    assert_rejected(&response);
}

#[tokio::test]
async fn test_session_cookie_is_http_only() {
    let app = spawn_app().await;

    let signup = submit_signup(&app.server, "alice", "alice@example.com", GOOD_PASSWORD).await;
    let cookie = signup.cookie(TEST_SESSION_COOKIE);

    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.path(), Some("/"));
    assert!(!cookie.value().is_empty());
}

#[tokio::test]
async fn test_forged_cookie_is_rejected() {
    let app = spawn_app().await;
    let forged = Cookie::new(TEST_SESSION_COOKIE, "not-a-session");

    let response = app.server.get("/userProfile").add_cookie(forged).await;

    assert_rejected(&response);
}
