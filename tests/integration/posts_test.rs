//! Post and comment integration tests

use axum::http::StatusCode;
use axum_test::multipart::MultipartForm;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use postboard::backend::posts::db::{get_post_by_id, get_post_detail};

use crate::assert_ok;
use crate::common::*;

fn comment_form(content: &str) -> MultipartForm {
    MultipartForm::new()
        .add_text("content", content.to_string())
        .add_text("imageName", "")
}

#[tokio::test]
async fn test_home_lists_posts_for_everyone() {
    let app = spawn_app().await;
    register(&app.server, "alice").await;
    publish_post(&app.server, &app.pool, "Hello from alice").await;
    app.server.post("/logout").await;

    let response = app.server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.text();
    assert!(body.contains("Hello from alice"));
    assert!(body.contains("Log in"));
}

#[tokio::test]
async fn test_post_form_requires_session() {
    let app = spawn_app().await;

    assert_redirect(&app.server.get("/post-form").await, "/login");

    let response = app
        .server
        .post("/post-form")
        .multipart(MultipartForm::new().add_text("content", "sneaky"))
        .await;
    assert_redirect(&response, "/login");
    assert_eq!(count_rows(&app.pool, "posts").await, 0);
}

#[tokio::test]
async fn test_create_post_with_picture() {
    let app = spawn_app().await;
    register(&app.server, "alice").await;

    let form = MultipartForm::new()
        .add_text("content", "Sunset at the lake")
        .add_text("picName", "sunset")
        .add_part("picPath", image_part("sunset.jpg"));
    let response = app.server.post("/post-form").multipart(form).await;
    assert_redirect(&response, "/");

    let id: Uuid = assert_ok!(
        sqlx::query_scalar("SELECT id FROM posts")
            .fetch_one(&app.pool)
            .await
    );
    let post = assert_ok!(get_post_by_id(&app.pool, id).await).unwrap();
    assert_eq!(post.content, "Sunset at the lake");
    assert_eq!(post.pic_name.as_deref(), Some("sunset"));
    assert!(post.pic_path.unwrap().starts_with("/avatar/"));
    assert!(post.comments.is_empty());
}

#[tokio::test]
async fn test_blank_post_rerenders_form() {
    let app = spawn_app().await;
    register(&app.server, "alice").await;

    let response = app
        .server
        .post("/post-form")
        .multipart(MultipartForm::new().add_text("content", "   ").add_text("picName", "x"))
        .await;

    assert_page_error(&response, StatusCode::UNPROCESSABLE_ENTITY, "Post validation failed: content");
    assert_eq!(count_rows(&app.pool, "posts").await, 0);
}

#[tokio::test]
async fn test_post_detail_shows_creator() {
    let app = spawn_app().await;
    register(&app.server, "alice").await;
    let id = publish_post(&app.server, &app.pool, "Detail me").await;

    let response = app.server.get(&format!("/post/{}", id)).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.text();
    assert!(body.contains("Detail me"));
    assert!(body.contains("alice"));
}

#[tokio::test]
async fn test_unknown_post_is_not_found() {
    let app = spawn_app().await;
    register(&app.server, "alice").await;

    let missing = app.server.get(&format!("/post/{}", Uuid::new_v4())).await;
    assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);

    let malformed = app.server.get("/post/not-a-uuid").await;
    assert_eq!(malformed.status_code(), StatusCode::NOT_FOUND);

    let comment = app
        .server
        .post(&format!("/post/{}", Uuid::new_v4()))
        .multipart(comment_form("hello?"))
        .await;
    assert_eq!(comment.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(count_rows(&app.pool, "comments").await, 0);
}

#[tokio::test]
async fn test_comment_appends_exactly_one_entry() {
    let app = spawn_app().await;
    register(&app.server, "alice").await;
    let id = publish_post(&app.server, &app.pool, "Comment on me").await;
    app.server.post("/logout").await;
    register(&app.server, "bob").await;

    let before = assert_ok!(get_post_by_id(&app.pool, id).await).unwrap();

    let form = comment_form("Nice post").add_part("imagePath", image_part("reaction.gif"));
    let response = app.server.post(&format!("/post/{}", id)).multipart(form).await;
    assert_redirect(&response, &format!("/post/{}", id));

    let after = assert_ok!(get_post_by_id(&app.pool, id).await).unwrap();
    assert_eq!(after.comments.len(), before.comments.len() + 1);

    let detail = assert_ok!(get_post_detail(&app.pool, id).await).unwrap();
    let comment = detail.comments.last().unwrap();
    assert_eq!(comment.id, *after.comments.last().unwrap());
    assert_eq!(comment.content, "Nice post");
    assert_eq!(comment.author.username, "bob");
    assert_eq!(comment.author.email, "bob@example.com");
    assert!(comment.image_path.is_some());
    assert_eq!(detail.creator.username, "alice");

    let page = app.server.get(&format!("/post/{}", id)).await;
    assert!(page.text().contains("Nice post"));
    assert!(page.text().contains("bob"));
}

#[tokio::test]
async fn test_comments_keep_their_order() {
    let app = spawn_app().await;
    register(&app.server, "alice").await;
    let id = publish_post(&app.server, &app.pool, "Ordered").await;

    for content in ["first", "second", "third"] {
        let response = app
            .server
            .post(&format!("/post/{}", id))
            .multipart(comment_form(content))
            .await;
        assert_redirect(&response, &format!("/post/{}", id));
    }

    let detail = assert_ok!(get_post_detail(&app.pool, id).await).unwrap();
    let contents: Vec<&str> = detail.comments.iter().map(|c| c.content.as_str()).collect();
    assert_eq!(contents, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn test_blank_comment_rerenders_post() {
    let app = spawn_app().await;
    register(&app.server, "alice").await;
    let id = publish_post(&app.server, &app.pool, "Quiet post").await;

    let response = app
        .server
        .post(&format!("/post/{}", id))
        .multipart(comment_form(""))
        .await;

    assert_page_error(&response, StatusCode::UNPROCESSABLE_ENTITY, "Comment validation failed: content");
    assert!(response.text().contains("Quiet post"));
    assert_eq!(count_rows(&app.pool, "comments").await, 0);
    assert_eq!(count_rows(&app.pool, "post_comments").await, 0);
}

#[tokio::test]
async fn test_unknown_route_renders_error_page() {
    let app = spawn_app().await;

    let response = app.server.get("/no/such/page").await;

    assert_page_error(
        &response,
        StatusCode::NOT_FOUND,
        "The page you are looking for does not exist.",
    );
}
