//! Credential store
//!
//! [`CredentialStore`] abstracts user persistence so [`AuthService`] does not
//! depend on a concrete database. [`StoreCredentials`] is the adapter over the
//! relational user repository.
//!
//! [`AuthService`]: crate::AuthService

use async_trait::async_trait;
use tracing::debug;

use tasks_store::{StoreError, UserId, UserRepo};

use crate::error::{AuthError, Result};
use crate::password::verify_password;

/// An authenticated user (never carries the password hash)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
}

/// User credential persistence
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Store a new user with an already-hashed password
    ///
    /// Fails with [`AuthError::DuplicateUser`] if the username is taken.
    async fn create_user(&self, username: &str, password_hash: &str) -> Result<UserId>;

    /// Look up a user and check the password against the stored hash
    ///
    /// Fails with [`AuthError::InvalidCredentials`] for an unknown username or
    /// a mismatched password; the two cases are not distinguished.
    async fn get_user(&self, username: &str, password: &str) -> Result<User>;
}

/// [`CredentialStore`] backed by the `users` table
#[derive(Debug, Clone)]
pub struct StoreCredentials {
    users: UserRepo,
}

impl StoreCredentials {
    pub fn new(users: UserRepo) -> Self {
        Self { users }
    }
}

#[async_trait]
impl CredentialStore for StoreCredentials {
    async fn create_user(&self, username: &str, password_hash: &str) -> Result<UserId> {
        self.users
            .create(username, password_hash)
            .await
            .map_err(|e| match e {
                StoreError::AlreadyExists { .. } => AuthError::DuplicateUser(username.to_string()),
                other => other.into(),
            })
    }

    async fn get_user(&self, username: &str, password: &str) -> Result<User> {
        let Some(record) = self.users.get_by_username(username).await? else {
            debug!(username, "Unknown username");
            return Err(AuthError::InvalidCredentials);
        };

        if !verify_password(password, &record.password_hash)? {
            debug!(user_id = %record.id, "Password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        Ok(User {
            id: record.id,
            username: record.username,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::hash_password;
    use tasks_store::Database;

    async fn store() -> StoreCredentials {
        let db = Database::in_memory().await.unwrap();
        StoreCredentials::new(db.users())
    }

    #[tokio::test]
    async fn test_create_and_get_user() {
        let store = store().await;
        let hash = hash_password("pw1").unwrap();

        let id = store.create_user("alice", &hash).await.unwrap();
        let user = store.get_user("alice", "pw1").await.unwrap();

        assert_eq!(user.id, id);
        assert_eq!(user.username, "alice");
    }

    #[tokio::test]
    async fn test_duplicate_user() {
        let store = store().await;
        let hash = hash_password("pw1").unwrap();

        store.create_user("alice", &hash).await.unwrap();
        let err = store.create_user("alice", &hash).await.unwrap_err();
        assert!(matches!(err, AuthError::DuplicateUser(ref name) if name == "alice"));
    }

    #[tokio::test]
    async fn test_invalid_credentials() {
        let store = store().await;
        let hash = hash_password("pw1").unwrap();
        store.create_user("alice", &hash).await.unwrap();

        assert!(matches!(
            store.get_user("alice", "wrong").await,
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            store.get_user("nobody", "pw1").await,
            Err(AuthError::InvalidCredentials)
        ));
    }
}
