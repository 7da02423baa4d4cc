use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::user::application::domain::entities::{display_name, person_name, FieldError};
use crate::user::application::ports::outgoing::ProfileChanges;

//
// ──────────────────────────────────────────────────────────
// Update Profile Command
// ──────────────────────────────────────────────────────────
//

/// Raw optional fields as sent by the client.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileInput {
    pub display_name: Option<String>,
    pub store_name: Option<String>,
    pub bio_description: Option<String>,
    pub profile_image: Option<String>,
    pub show_real_name: Option<bool>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    user_id: UserId,
    changes: ProfileChanges,
}

impl UpdateProfileCommand {
    pub fn new(user_id: UserId, input: UpdateProfileInput) -> Result<Self, FieldError> {
        let display_name = input.display_name.as_deref().map(display_name).transpose()?;
        let first_name = input
            .first_name
            .as_deref()
            .map(|v| person_name(v, "first_name"))
            .transpose()?;
        let last_name = input
            .last_name
            .as_deref()
            .map(|v| person_name(v, "last_name"))
            .transpose()?;

        Ok(Self {
            user_id,
            changes: ProfileChanges {
                display_name,
                store_name: input.store_name,
                bio_description: input.bio_description,
                profile_image: input.profile_image,
                show_real_name: input.show_real_name,
                first_name,
                last_name,
            },
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn changes(&self) -> &ProfileChanges {
        &self.changes
    }

    pub fn into_changes(self) -> ProfileChanges {
        self.changes
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("Editing first or last name is disabled")]
    NameEditDisabled,

    #[error("Display name already in use")]
    DisplayNameAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(&self, command: UpdateProfileCommand) -> Result<(), UpdateProfileError>;
}
