//! Database connection module for the CardiacReport application
//!
//! Provides a process-wide SQLite connection pool. The pool falls back to an
//! in-memory database when the configured file path cannot be used, so the
//! API keeps serving even on a read-only filesystem.

use std::env;
use std::sync::Arc;
use once_cell::sync::OnceCell;
use tracing::{error, info, warn};

use super::migrations;
use super::DatabaseError;

/// Global database pool used throughout the application
static DB_POOL: OnceCell<DatabasePool> = OnceCell::new();

/// Database connection pool
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: Arc<r2d2::Pool<r2d2_sqlite::SqliteConnectionManager>>,
}

impl DatabasePool {
    /// Borrow the underlying r2d2 pool
    pub fn inner(&self) -> &r2d2::Pool<r2d2_sqlite::SqliteConnectionManager> {
        &self.pool
    }
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file
    pub sqlite_path: String,
    /// Maximum number of pooled connections
    pub max_connections: u32,
    /// Connection timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            sqlite_path: "./data/cardiac_report.db".to_string(),
            max_connections: 10,
            timeout_seconds: 30,
        }
    }
}

impl DatabaseConfig {
    /// Create a new database configuration from environment variables
    pub fn from_env() -> Self {
        let sqlite_path = env::var("DB_SQLITE_PATH")
            .unwrap_or_else(|_| "./data/cardiac_report.db".to_string());

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(10);

        let timeout_seconds = env::var("DB_TIMEOUT_SECONDS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(30);

        info!(
            "Database configuration: path={}, max_connections={}, timeout={}s",
            sqlite_path, max_connections, timeout_seconds
        );

        Self {
            sqlite_path,
            max_connections,
            timeout_seconds,
        }
    }
}

/// Initialize the database connection pool
pub fn initialize_database_pool() -> Result<(), DatabaseError> {
    if DB_POOL.get().is_some() {
        // Tests initialize the pool once per process; treat repeats as success.
        return Ok(());
    }

    let config = DatabaseConfig::from_env();
    let pool = initialize_sqlite_pool(&config)?;

    if DB_POOL.set(pool).is_err() {
        return Ok(());
    }

    migrations::run(&get_db_pool()?)?;
    Ok(())
}

/// Get the database connection pool
pub fn get_db_pool() -> Result<DatabasePool, DatabaseError> {
    DB_POOL
        .get()
        .cloned()
        .ok_or_else(|| DatabaseError::ConnectionError("Database pool is not initialized".to_string()))
}

/// Initialize the SQLite connection pool, falling back to memory on failure
fn initialize_sqlite_pool(config: &DatabaseConfig) -> Result<DatabasePool, DatabaseError> {
    use rusqlite::OpenFlags;
    use std::fs;
    use std::path::Path;

    info!("Initializing SQLite database at: {}", config.sqlite_path);

    if let Some(parent) = Path::new(&config.sqlite_path).parent() {
        if !parent.exists() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!("Failed to create directory {:?}: {}, falling back to in-memory database", parent, e);
                return initialize_in_memory_pool(config);
            }
        }
    }

    let manager = r2d2_sqlite::SqliteConnectionManager::file(&config.sqlite_path)
        .with_flags(OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE);

    match r2d2::Pool::builder()
        .max_size(config.max_connections)
        .connection_timeout(std::time::Duration::from_secs(config.timeout_seconds))
        .build(manager)
    {
        Ok(pool) => match pool.get() {
            Ok(_) => {
                info!("SQLite connection pool created successfully");
                Ok(DatabasePool { pool: Arc::new(pool) })
            }
            Err(e) => {
                error!("Failed to connect to SQLite database: {}", e);
                warn!("Falling back to in-memory SQLite database");
                initialize_in_memory_pool(config)
            }
        },
        Err(e) => {
            error!("Failed to create SQLite connection pool: {}", e);
            warn!("Falling back to in-memory SQLite database");
            initialize_in_memory_pool(config)
        }
    }
}

/// Initialize an in-memory SQLite database as fallback
fn initialize_in_memory_pool(config: &DatabaseConfig) -> Result<DatabasePool, DatabaseError> {
    info!("Initializing in-memory SQLite database");

    let manager = r2d2_sqlite::SqliteConnectionManager::memory();

    let pool = r2d2::Pool::builder()
        // A shared in-memory database needs every connection to see the same
        // data; a single connection avoids per-connection snapshots.
        .max_size(1)
        .connection_timeout(std::time::Duration::from_secs(config.timeout_seconds))
        .build(manager)
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    info!("In-memory SQLite database initialized successfully");
    Ok(DatabasePool { pool: Arc::new(pool) })
}

/// Get information about the current database connection
pub fn get_connection_info() -> Option<String> {
    let pool = DB_POOL.get()?;

    match pool.inner().get() {
        Ok(conn) => {
            let connection_info = match conn.query_row("PRAGMA database_list", [], |row| {
                row.get::<_, String>(2)
            }) {
                Ok(path) if path.is_empty() || path == ":memory:" => {
                    "SQLite in-memory database".to_string()
                }
                Ok(path) => format!("SQLite database at {}", path),
                Err(_) => "SQLite database (path unknown)".to_string(),
            };

            let state = pool.inner().state();
            Some(format!(
                "{} (connections: active={}, idle={})",
                connection_info, state.connections, state.idle_connections
            ))
        }
        Err(e) => {
            error!("Failed to get SQLite connection: {}", e);
            Some(format!("SQLite connection error: {}", e))
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn test_database_config_default() {
        let config = DatabaseConfig::default();
        assert_eq!(config.sqlite_path, "./data/cardiac_report.db");
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    fn test_in_memory_pool_roundtrip() {
        let config = DatabaseConfig::default();
        let pool = initialize_in_memory_pool(&config).unwrap();
        migrations::run(&pool).unwrap();

        let conn = pool.inner().get().unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM studies", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
