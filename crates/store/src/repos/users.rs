//! User repository

use sqlx::SqlitePool;
use tracing::info;

use crate::error::{Result, StoreError, is_unique_violation};
use crate::models::{UserId, UserRecord};

/// User repository
#[derive(Debug, Clone)]
pub struct UserRepo {
    pool: SqlitePool,
}

impl UserRepo {
    /// Create a new user repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a user with an already-hashed password
    ///
    /// Returns `AlreadyExists` if the username is taken.
    pub async fn create(&self, username: &str, password_hash: &str) -> Result<UserId> {
        let result = sqlx::query("INSERT INTO users (username, password_hash) VALUES (?, ?)")
            .bind(username)
            .bind(password_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    StoreError::already_exists("user", username)
                } else {
                    StoreError::Database(e)
                }
            })?;

        let id = UserId(result.last_insert_rowid());
        info!(user_id = %id, username, "Created user");
        Ok(id)
    }

    /// Get user by username
    pub async fn get_by_username(&self, username: &str) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            "SELECT id, username, password_hash FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
