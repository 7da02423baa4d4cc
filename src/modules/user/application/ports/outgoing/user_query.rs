use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

/// Public, anonymized view of a profile. Never carries email or real name.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProfileSummary {
    #[schema(example = "ToyBox")]
    pub display_name: String,
    #[schema(example = "ToyBox Vintage")]
    pub store_name: Option<String>,
    pub bio_description: Option<String>,
    pub profile_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProfileDetail {
    pub display_name: String,
    pub store_name: Option<String>,
    pub bio_description: Option<String>,
    pub profile_image: Option<String>,
    pub show_real_name: bool,
    pub updated_at: DateTime<Utc>,
}

/// The caller's own account, private fields included.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct UserDetail {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub profile: Option<ProfileDetail>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side over active users. Soft-deleted users never appear.
#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn get_current_user(&self, user_id: UserId)
        -> Result<Option<UserDetail>, UserQueryError>;

    async fn list_public_summaries(&self) -> Result<Vec<ProfileSummary>, UserQueryError>;

    /// Case-insensitive substring match on display name or store name.
    async fn search_profiles(
        &self,
        term: &str,
        limit: u64,
    ) -> Result<Vec<ProfileSummary>, UserQueryError>;
}
