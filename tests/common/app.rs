//! Test application
//!
//! Builds the full router over a fresh in-memory SQLite database and a
//! temporary upload directory, wrapped in an `axum-test` server that keeps
//! cookies between requests like a browser would.

use std::sync::Arc;

use axum_test::{TestServer, TestServerConfig};
use sqlx::SqlitePool;
use tempfile::TempDir;

use postboard::backend::routes::create_router;
use postboard::backend::server::config::connect_database;
use postboard::backend::server::{AppState, ServerConfig};
use postboard::backend::uploads::DiskUploadStore;

/// Session cookie name used by the test configuration
pub const TEST_SESSION_COOKIE: &str = "test_sid";

/// A running test application
pub struct TestApp {
    pub server: TestServer,
    pub pool: SqlitePool,
    /// Kept alive for the duration of the test
    pub upload_dir: TempDir,
}

/// Start a fresh application
pub async fn spawn_app() -> TestApp {
    let upload_dir = tempfile::tempdir().expect("Failed to create upload dir");

    let config = ServerConfig::builder()
        .database_url("sqlite::memory:")
        .upload_dir(upload_dir.path())
        .session_cookie(TEST_SESSION_COOKIE)
        .build()
        .expect("Invalid test configuration");

    let pool = connect_database(&config.database_url, 1)
        .await
        .expect("Failed to create test database");

    let uploads = Arc::new(DiskUploadStore::new(
        config.upload_dir.clone(),
        config.upload_url_prefix.clone(),
    ));

    let state = AppState {
        db_pool: pool.clone(),
        uploads,
        config: Arc::new(config),
    };

    let server = TestServer::new_with_config(
        create_router(state),
        TestServerConfig {
            save_cookies: true,
            ..TestServerConfig::default()
        },
    )
    .expect("Failed to start test server");

    TestApp {
        server,
        pool,
        upload_dir,
    }
}
