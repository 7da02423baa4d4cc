use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::user::application::domain::entities::SoftDeleteOutcome;

/// Everything needed to insert a user and its profile in one go.
#[derive(Clone)]
pub struct NewUserRecord {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub display_name: String,
}

impl std::fmt::Debug for NewUserRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUserRecord")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("display_name", &self.display_name)
            .finish_non_exhaustive()
    }
}

/// Partial profile update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileChanges {
    pub display_name: Option<String>,
    pub store_name: Option<String>,
    pub bio_description: Option<String>,
    pub profile_image: Option<String>,
    pub show_real_name: Option<bool>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl ProfileChanges {
    pub fn touches_user_row(&self) -> bool {
        self.first_name.is_some() || self.last_name.is_some()
    }

    pub fn touches_bio_row(&self) -> bool {
        self.display_name.is_some()
            || self.store_name.is_some()
            || self.bio_description.is_some()
            || self.profile_image.is_some()
            || self.show_real_name.is_some()
    }

    pub fn is_empty(&self) -> bool {
        !self.touches_user_row() && !self.touches_bio_row()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Display name already in use")]
    DisplayNameAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert the user row and its profile row atomically.
    async fn create_user_with_bio(&self, record: NewUserRecord)
        -> Result<(), UserRepositoryError>;

    /// Apply `changes` to an active user atomically.
    async fn update_profile(
        &self,
        user_id: UserId,
        changes: ProfileChanges,
    ) -> Result<(), UserRepositoryError>;

    async fn soft_delete_user(
        &self,
        user_id: UserId,
    ) -> Result<SoftDeleteOutcome, UserRepositoryError>;
}
