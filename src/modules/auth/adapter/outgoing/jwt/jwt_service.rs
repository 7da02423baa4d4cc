use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use std::fmt;
use tracing;

use crate::auth::application::domain::entities::{IssuedToken, UserId};
use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};

use super::jwt_config::JwtConfig;

/// Session tokens live for a fixed 24 hours and are never refreshed.
pub const TOKEN_TTL_HOURS: i64 = 24;

#[derive(Clone)]
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("config", &"JwtConfig")
            .finish()
    }
}

impl JwtTokenService {
    /// Initialize the service with config
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            encoding_key,
            decoding_key,
        }
    }

    pub fn issue_token_at(
        &self,
        user_id: UserId,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, TokenError> {
        let expires_at = now + Duration::hours(TOKEN_TTL_HOURS);

        let claims = TokenClaims {
            sub: user_id.value(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Verify signature and claims, then compare `exp` against `now`.
    /// A token is accepted up to and including its expiry second.
    pub fn verify_token_at(&self, token: &str, now: DateTime<Utc>) -> Result<UserId, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let decoded =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: Invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    ErrorKind::InvalidToken | ErrorKind::InvalidAlgorithm => {
                        tracing::error!("Security alert: Malformed or invalid algorithm token");
                        TokenError::MalformedToken
                    }
                    ErrorKind::Base64(_) | ErrorKind::Json(_) | ErrorKind::Utf8(_) => {
                        tracing::warn!("Token verification failed: Malformed token");
                        TokenError::MalformedToken
                    }
                    ErrorKind::MissingRequiredClaim(claim) => {
                        tracing::warn!("Token verification failed: missing claim '{}'", claim);
                        TokenError::MalformedToken
                    }
                    _ => {
                        tracing::warn!("Token verification failed: Unknown error");
                        TokenError::MalformedToken
                    }
                }
            })?;

        if now.timestamp() > decoded.claims.exp {
            tracing::debug!("Token verification failed: Token expired");
            return Err(TokenError::TokenExpired);
        }

        Ok(UserId::from(decoded.claims.sub))
    }
}

impl TokenProvider for JwtTokenService {
    fn issue_token(&self, user_id: UserId) -> Result<IssuedToken, TokenError> {
        self.issue_token_at(user_id, Utc::now())
    }

    fn verify_token(&self, token: &str) -> Result<UserId, TokenError> {
        self.verify_token_at(token, Utc::now())
    }
}
