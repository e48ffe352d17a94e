/**
 * Application State Management
 *
 * This module defines the application state shared by every handler:
 * the database pool, the upload store and the loaded configuration.
 * Everything in it is cheap to clone (`SqlitePool` and `Arc`), so Axum
 * clones it into each request.
 */

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::backend::server::config::ServerConfig;
use crate::backend::uploads::UploadStore;

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,
    /// Where uploaded files go
    pub uploads: Arc<dyn UploadStore>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}
