//! Database connection and schema management
//!
//! SQLite via sqlx. One pool is shared by the credential store and the
//! list/item repositories; all durable state lives here.
//!
//! # Tables
//!
//! - `users` - identity records
//! - `todo_lists` / `users_lists` - lists and the list→user ownership relation
//! - `todo_items` / `lists_items` - items and the item→list membership relation

use std::path::Path;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use crate::error::{Result, StoreError};
use crate::repos::{ItemRepo, ListRepo, UserRepo};

/// Database handle
///
/// Cheap to clone (the pool is internally reference counted).
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open or create a database file at the given path
    ///
    /// Creates parent directories and initializes the schema if needed.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                StoreError::invalid(
                    "db_path",
                    format!("failed to create directory {}: {}", parent.display(), e),
                )
            })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let db = Self { pool };
        db.init_schema().await?;

        info!(path = %path.display(), "Database opened");
        Ok(db)
    }

    /// Create an in-memory database (for testing)
    ///
    /// Uses a single connection that never idles out, so the in-memory
    /// database lives as long as the pool.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let db = Self { pool };
        db.init_schema().await?;
        Ok(db)
    }

    /// Underlying connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// User repository
    pub fn users(&self) -> UserRepo {
        UserRepo::new(self.pool.clone())
    }

    /// List repository
    pub fn lists(&self) -> ListRepo {
        ListRepo::new(self.pool.clone())
    }

    /// Item repository
    pub fn items(&self) -> ItemRepo {
        ItemRepo::new(self.pool.clone())
    }

    /// Close the pool, waiting for checked-out connections
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Initialize database schema
    async fn init_schema(&self) -> Result<()> {
        const SCHEMA: [&str; 7] = [
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT NOT NULL UNIQUE,
                password_hash TEXT NOT NULL
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS todo_lists (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                done INTEGER NOT NULL DEFAULT 0
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS users_lists (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                list_id INTEGER NOT NULL UNIQUE REFERENCES todo_lists(id) ON DELETE CASCADE
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS todo_items (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                done INTEGER NOT NULL DEFAULT 0
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS lists_items (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                item_id INTEGER NOT NULL UNIQUE REFERENCES todo_items(id) ON DELETE CASCADE,
                list_id INTEGER NOT NULL REFERENCES todo_lists(id) ON DELETE CASCADE
            )
            "#,
            "CREATE INDEX IF NOT EXISTS idx_users_lists_user ON users_lists(user_id)",
            "CREATE INDEX IF NOT EXISTS idx_lists_items_list ON lists_items(list_id)",
        ];

        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }

        debug!("Database schema initialized");
        Ok(())
    }
}
