use async_trait::async_trait;

use crate::marker::application::domain::entities::MarkerRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum MarkerQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait MarkerQuery: Send + Sync {
    /// Markers whose owner is active, newest first.
    async fn list_with_owners(&self) -> Result<Vec<MarkerRecord>, MarkerQueryError>;
}
