use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::auth::application::ports::{
    incoming::use_cases::{LoginCommand, LoginError, LoginOutput, LoginUserUseCase},
    outgoing::{CredentialQuery, PasswordHasher, TokenProvider},
};

#[derive(Clone)]
pub struct LoginUserService<Q>
where
    Q: CredentialQuery + Send + Sync,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginUserService<Q>
where
    Q: CredentialQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> LoginUserUseCase for LoginUserService<Q>
where
    Q: CredentialQuery + Send + Sync,
{
    async fn execute(&self, command: LoginCommand) -> Result<LoginOutput, LoginError> {
        let credentials = self
            .query
            .find_active_by_email(command.email())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?;

        let Some(credentials) = credentials else {
            self.password_hasher
                .equalize_timing(command.password())
                .await;
            debug!("Login rejected: no active account for the given email");
            return Err(LoginError::InvalidCredentials);
        };

        let is_valid = self
            .password_hasher
            .verify_password(command.password(), &credentials.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %credentials.user_id, "Login rejected: wrong password");
            return Err(LoginError::InvalidCredentials);
        }

        let session = self
            .token_provider
            .issue_token(credentials.user_id)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginOutput {
            user_id: credentials.user_id,
            session,
        })
    }
}
