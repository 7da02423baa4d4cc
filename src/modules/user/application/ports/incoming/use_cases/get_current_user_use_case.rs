use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::user::application::ports::outgoing::UserDetail;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCurrentUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetCurrentUserUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<UserDetail, GetCurrentUserError>;
}
