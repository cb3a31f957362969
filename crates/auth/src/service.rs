//! Authentication service
//!
//! Registration, login and token verification on top of a
//! [`CredentialStore`] and a [`TokenService`].

use std::sync::Arc;

use tracing::{debug, info};

use tasks_store::UserId;

use crate::credentials::CredentialStore;
use crate::error::{AuthError, Result};
use crate::password::hash_password;
use crate::token::TokenService;

/// Authentication service
///
/// # Example
///
/// ```ignore
/// let credentials = StoreCredentials::new(db.users());
/// let tokens = TokenService::new(TokenConfig::new(secret))?;
/// let auth = AuthService::new(Arc::new(credentials), tokens);
///
/// let id = auth.create_user("alice", "pw1").await?;
/// let token = auth.generate_token("alice", "pw1").await?;
/// assert_eq!(auth.parse_token(&token)?, id);
/// ```
pub struct AuthService {
    credentials: Arc<dyn CredentialStore>,
    tokens: TokenService,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("tokens", &self.tokens)
            .finish()
    }
}

impl AuthService {
    pub fn new(credentials: Arc<dyn CredentialStore>, tokens: TokenService) -> Self {
        Self {
            credentials,
            tokens,
        }
    }

    /// Register a user
    ///
    /// The password is hashed before it reaches the store.
    pub async fn create_user(&self, username: &str, password: &str) -> Result<UserId> {
        validate_credentials(username, password)?;

        let hash = hash_password(password)?;
        let id = self.credentials.create_user(username, &hash).await?;

        info!(user_id = %id, username, "User registered");
        Ok(id)
    }

    /// Authenticate and mint a token for the user
    pub async fn generate_token(&self, username: &str, password: &str) -> Result<String> {
        validate_credentials(username, password)?;

        let user = self.credentials.get_user(username, password).await?;
        let token = self.tokens.issue(user.id)?;

        info!(user_id = %user.id, username = %user.username, "User signed in");
        Ok(token)
    }

    /// Verify a token and return the user id it carries
    pub fn parse_token(&self, token: &str) -> Result<UserId> {
        self.tokens.verify(token).inspect_err(|e| {
            debug!(error = %e, "Token rejected");
        })
    }
}

fn validate_credentials(username: &str, password: &str) -> Result<()> {
    if username.trim().is_empty() {
        return Err(AuthError::invalid_input("username is required"));
    }
    if password.is_empty() {
        return Err(AuthError::invalid_input("password is required"));
    }
    Ok(())
}
