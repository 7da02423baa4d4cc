use async_trait::async_trait;

use crate::user::application::ports::outgoing::ProfileSummary;

pub const SEARCH_RESULT_LIMIT: u64 = 10;

//
// ──────────────────────────────────────────────────────────
// Search Query
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchProfilesQuery {
    term: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchProfilesQueryError {
    #[error("Missing search query")]
    MissingQuery,
}

impl SearchProfilesQuery {
    pub fn new(raw: Option<&str>) -> Result<Self, SearchProfilesQueryError> {
        let term = raw.map(str::trim).unwrap_or_default();

        if term.is_empty() {
            return Err(SearchProfilesQueryError::MissingQuery);
        }

        Ok(Self {
            term: term.to_string(),
        })
    }

    pub fn term(&self) -> &str {
        &self.term
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchProfilesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait SearchProfilesUseCase: Send + Sync {
    async fn execute(
        &self,
        query: SearchProfilesQuery,
    ) -> Result<Vec<ProfileSummary>, SearchProfilesError>;
}
