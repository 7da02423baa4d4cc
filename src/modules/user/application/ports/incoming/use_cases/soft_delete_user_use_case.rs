use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::user::application::domain::entities::SoftDeleteOutcome;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SoftDeleteUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SoftDeleteUserUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<SoftDeleteOutcome, SoftDeleteUserError>;
}
