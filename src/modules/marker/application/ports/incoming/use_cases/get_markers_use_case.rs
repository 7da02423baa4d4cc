use async_trait::async_trait;

use crate::marker::application::domain::entities::MarkerWithOwner;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetMarkersError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetMarkersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<MarkerWithOwner>, GetMarkersError>;
}
