/**
 * Server Configuration
 *
 * This module loads the server configuration from the environment and opens
 * the SQLite database.
 *
 * # Configuration Sources
 *
 * Values come from environment variables (a `.env` file is loaded by the
 * binary first). Every variable has a default suitable for local
 * development; a value that is present but unparsable aborts start-up.
 *
 * | Variable | Default |
 * |---|---|
 * | `DATABASE_URL` | `sqlite://postboard.db?mode=rwc` |
 * | `DATABASE_MAX_CONNECTIONS` | `5` |
 * | `SERVER_PORT` | `3000` |
 * | `UPLOAD_DIR` | `public/avatar` |
 * | `UPLOAD_URL_PREFIX` | `/avatar` |
 * | `SESSION_COOKIE` | `postboard_sid` |
 * | `SESSION_TTL_HOURS` | `336` |
 * | `MAX_UPLOAD_BYTES` | `10485760` |
 */

use std::path::PathBuf;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;

use crate::backend::error::StoreError;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
    #[error("{name} must not be empty")]
    Empty { name: &'static str },
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// SQLite database URL
    pub database_url: String,
    /// Upper bound on pooled connections (forced to 1 for in-memory databases)
    pub max_connections: u32,
    /// TCP port bound on all interfaces
    pub port: u16,
    /// Directory uploaded files are written to
    pub upload_dir: PathBuf,
    /// URL prefix `upload_dir` is served under
    pub upload_url_prefix: String,
    /// Name of the session cookie
    pub session_cookie: String,
    /// Session lifetime in hours
    pub session_ttl_hours: i64,
    /// Body limit for multipart routes
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://postboard.db?mode=rwc".to_string(),
            max_connections: 5,
            port: 3000,
            upload_dir: PathBuf::from("public/avatar"),
            upload_url_prefix: "/avatar".to_string(),
            session_cookie: "postboard_sid".to_string(),
            session_ttl_hours: 14 * 24,
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            max_connections: parse_var(&lookup, "DATABASE_MAX_CONNECTIONS", defaults.max_connections)?,
            port: parse_var(&lookup, "SERVER_PORT", defaults.port)?,
            upload_dir: lookup("UPLOAD_DIR").map(PathBuf::from).unwrap_or(defaults.upload_dir),
            upload_url_prefix: lookup("UPLOAD_URL_PREFIX").unwrap_or(defaults.upload_url_prefix),
            session_cookie: lookup("SESSION_COOKIE").unwrap_or(defaults.session_cookie),
            session_ttl_hours: parse_var(&lookup, "SESSION_TTL_HOURS", defaults.session_ttl_hours)?,
            max_upload_bytes: parse_var(&lookup, "MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::Empty { name: "DATABASE_URL" });
        }
        if self.session_cookie.trim().is_empty() {
            return Err(ConfigError::Empty { name: "SESSION_COOKIE" });
        }
        if !self.upload_url_prefix.starts_with('/') || self.upload_url_prefix.ends_with('/') {
            return Err(ConfigError::InvalidValue {
                name: "UPLOAD_URL_PREFIX",
                value: self.upload_url_prefix.clone(),
            });
        }
        if self.session_ttl_hours <= 0 {
            return Err(ConfigError::InvalidValue {
                name: "SESSION_TTL_HOURS",
                value: self.session_ttl_hours.to_string(),
            });
        }
        Ok(())
    }

    /// Session lifetime
    pub fn session_ttl(&self) -> chrono::Duration {
        chrono::Duration::hours(self.session_ttl_hours)
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
    }
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    config: ServerConfig,
}

impl ServerConfigBuilder {
    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.config.database_url = url.into();
        self
    }

    /// Set the TCP port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the upload directory
    pub fn upload_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.upload_dir = dir.into();
        self
    }

    /// Set the session cookie name
    pub fn session_cookie(mut self, name: impl Into<String>) -> Self {
        self.config.session_cookie = name.into();
        self
    }

    /// Set the session lifetime
    pub fn session_ttl_hours(mut self, hours: i64) -> Self {
        self.config.session_ttl_hours = hours;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Open the database and run migrations
///
/// In-memory databases get a single connection that is never recycled,
/// since closing it would drop the data.
pub async fn connect_database(url: &str, max_connections: u32) -> Result<SqlitePool, StoreError> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let in_memory = url.contains(":memory:") || url.contains("mode=memory");
    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections.max(1))
    };

    let pool = pool_options.connect_with(options).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}

/// Fresh in-memory database with the schema applied
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    connect_database("sqlite::memory:", 1)
        .await
        .expect("Failed to create in-memory database")
}
