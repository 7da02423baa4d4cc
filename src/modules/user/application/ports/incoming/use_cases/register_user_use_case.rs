use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::user::application::domain::entities::{
    check_password, display_name, normalize_email, person_name, FieldError,
};

//
// ──────────────────────────────────────────────────────────
// Register User Command
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct RegisterUserCommand {
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    display_name: String,
}

impl std::fmt::Debug for RegisterUserCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterUserCommand")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("display_name", &self.display_name)
            .finish()
    }
}

impl RegisterUserCommand {
    pub fn new(
        first_name: String,
        last_name: String,
        email: String,
        password: String,
        display_name_raw: String,
    ) -> Result<Self, FieldError> {
        let first_name = person_name(&first_name, "first_name")?;
        let last_name = person_name(&last_name, "last_name")?;
        let email = normalize_email(&email)?;
        check_password(&password)?;
        let display_name = display_name(&display_name_raw)?;

        Ok(Self {
            first_name,
            last_name,
            email,
            password,
            display_name,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

//
// ──────────────────────────────────────────────────────────
// Output
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RegisteredUser {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: Uuid,
    #[schema(example = "Ada")]
    pub first_name: String,
    #[schema(example = "Lovelace")]
    pub last_name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "ToyBox")]
    pub display_name: String,
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Display name already in use")]
    DisplayNameAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, command: RegisterUserCommand)
        -> Result<RegisteredUser, RegisterUserError>;
}
