/**
 * Server Initialization
 *
 * This module handles the initialization of the Axum application: opening
 * the database, building the upload store and application state, starting
 * the session cleanup task, and assembling the router.
 */

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use sqlx::SqlitePool;

use crate::backend::auth::sessions::purge_expired_sessions;
use crate::backend::error::StoreError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{connect_database, ServerConfig};
use crate::backend::server::state::AppState;
use crate::backend::uploads::DiskUploadStore;

/// How often expired sessions are deleted
const SESSION_CLEANUP_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Create and configure the Axum application
///
/// # Initialization Steps
///
/// 1. **Open Database**: Connects to SQLite and runs migrations
/// 2. **Create Upload Store**: Files go to `config.upload_dir`
/// 3. **Start Cleanup**: Spawns the expired-session purge task
/// 4. **Create Router**: Configures all routes and middleware
///
/// # Errors
///
/// Fails if the database cannot be opened or migrated; the server does not
/// start without its store.
pub async fn create_app(config: ServerConfig) -> Result<Router<()>, StoreError> {
    tracing::info!("Initializing postboard server");

    let db_pool = connect_database(&config.database_url, config.max_connections).await?;
    let uploads = Arc::new(DiskUploadStore::new(
        config.upload_dir.clone(),
        config.upload_url_prefix.clone(),
    ));

    let app_state = AppState {
        db_pool: db_pool.clone(),
        uploads,
        config: Arc::new(config),
    };

    spawn_session_cleanup(db_pool);

    let app = create_router(app_state);
    tracing::info!("Router configured");

    Ok(app)
}

/// Periodically delete expired sessions
fn spawn_session_cleanup(pool: SqlitePool) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_CLEANUP_INTERVAL);
        loop {
            interval.tick().await;
            match purge_expired_sessions(&pool).await {
                Ok(0) => {}
                Ok(purged) => tracing::debug!("Purged {} expired sessions", purged),
                Err(e) => tracing::warn!("Failed to purge expired sessions: {}", e),
            }
        }
    });
}
