use std::fmt;

use crate::config::ConfigError;

/// HS256 needs at least this many bytes of key material.
pub const MIN_SECRET_BYTES: usize = 32;

#[derive(Clone)]
pub struct JwtConfig {
    pub secret_key: String,
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

impl JwtConfig {
    pub fn new(secret_key: impl Into<String>) -> Result<Self, ConfigError> {
        let secret_key = secret_key.into();

        if secret_key.len() < MIN_SECRET_BYTES {
            return Err(ConfigError::Invalid {
                name: "JWT_SECRET",
                reason: format!("must be at least {} bytes long", MIN_SECRET_BYTES),
            });
        }

        Ok(Self { secret_key })
    }

    /// Read `JWT_SECRET` through the given lookup
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = lookup("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;
        Self::new(secret_key)
    }
}
