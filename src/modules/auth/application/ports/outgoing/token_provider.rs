use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::application::domain::entities::{IssuedToken, UserId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// Structure for JWT Claims
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid, // User ID
    pub exp: i64,  // Expiration timestamp (seconds)
}

pub trait TokenProvider: Send + Sync {
    fn issue_token(&self, user_id: UserId) -> Result<IssuedToken, TokenError>;
    fn verify_token(&self, token: &str) -> Result<UserId, TokenError>;
}
