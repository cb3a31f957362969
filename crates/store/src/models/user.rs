//! User model

row_id!(
    /// User identifier (server-assigned)
    UserId
);

/// Stored user row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    /// User ID
    pub id: UserId,
    /// Username (unique)
    pub username: String,
    /// Argon2 password hash in PHC format
    pub password_hash: String,
}
