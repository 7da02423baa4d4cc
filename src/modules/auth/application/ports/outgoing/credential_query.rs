use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

/// Stored login material for an active (not soft-deleted) account.
#[derive(Clone)]
pub struct UserCredentials {
    pub user_id: UserId,
    pub password_hash: String,
}

impl std::fmt::Debug for UserCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCredentials")
            .field("user_id", &self.user_id)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CredentialQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CredentialQuery: Send + Sync {
    async fn find_active_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, CredentialQueryError>;
}
