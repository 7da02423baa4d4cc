use async_trait::async_trait;

use crate::user::application::ports::outgoing::ProfileSummary;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPublicSummariesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetPublicSummariesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ProfileSummary>, GetPublicSummariesError>;
}
