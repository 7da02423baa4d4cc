use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::user::application::ports::{
    incoming::use_cases::{
        GetCurrentUserError, GetCurrentUserUseCase, GetPublicSummariesError,
        GetPublicSummariesUseCase, SearchProfilesError, SearchProfilesQuery,
        SearchProfilesUseCase, SEARCH_RESULT_LIMIT,
    },
    outgoing::{ProfileSummary, UserDetail, UserQuery},
};

//
// ──────────────────────────────────────────────────────────
// Get Current User
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct GetCurrentUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetCurrentUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCurrentUserUseCase for GetCurrentUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<UserDetail, GetCurrentUserError> {
        self.query
            .get_current_user(user_id)
            .await
            .map_err(|e| GetCurrentUserError::QueryError(e.to_string()))?
            .ok_or(GetCurrentUserError::UserNotFound)
    }
}

//
// ──────────────────────────────────────────────────────────
// Public Summaries
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct GetPublicSummariesService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetPublicSummariesService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPublicSummariesUseCase for GetPublicSummariesService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ProfileSummary>, GetPublicSummariesError> {
        self.query
            .list_public_summaries()
            .await
            .map_err(|e| GetPublicSummariesError::QueryError(e.to_string()))
    }
}

//
// ──────────────────────────────────────────────────────────
// Search
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct SearchProfilesService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> SearchProfilesService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> SearchProfilesUseCase for SearchProfilesService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        query: SearchProfilesQuery,
    ) -> Result<Vec<ProfileSummary>, SearchProfilesError> {
        let mut results = self
            .query
            .search_profiles(query.term(), SEARCH_RESULT_LIMIT)
            .await
            .map_err(|e| SearchProfilesError::QueryError(e.to_string()))?;

        results.truncate(SEARCH_RESULT_LIMIT as usize);
        Ok(results)
    }
}
