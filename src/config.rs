use std::{env, fmt};

use crate::auth::adapter::outgoing::jwt::JwtConfig;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:5173";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Which password hashing scheme new hashes are produced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HasherKind {
    Bcrypt,
    Argon2,
}

#[derive(Clone)]
pub struct AppConfig {
    pub environment: String,
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt: JwtConfig,
    pub allowed_origins: Vec<String>,
    pub password_hasher: HasherKind,
    pub allow_real_name_edits: bool,
    pub cookie_secure: bool,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("environment", &self.environment)
            .field("database_url", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("jwt", &self.jwt)
            .field("allowed_origins", &self.allowed_origins)
            .field("password_hasher", &self.password_hasher)
            .field("allow_real_name_edits", &self.allow_real_name_edits)
            .field("cookie_secure", &self.cookie_secure)
            .finish()
    }
}

impl AppConfig {
    /// Load `.env.{RUST_ENV}` (falling back to `.env`) and read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{}", environment);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("RUST_ENV").unwrap_or_else(|| "development".to_string());

        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                name: "PORT",
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let jwt = JwtConfig::from_lookup(&lookup)?;

        let allowed_origins: Vec<String> = lookup("ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let password_hasher = match lookup("PASSWORD_HASHER").as_deref().map(str::trim) {
            None | Some("bcrypt") => HasherKind::Bcrypt,
            Some("argon2") => HasherKind::Argon2,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "PASSWORD_HASHER",
                    reason: format!("expected 'bcrypt' or 'argon2', got '{}'", other),
                })
            }
        };

        let allow_real_name_edits = parse_flag(&lookup, "ALLOW_REAL_NAME_EDITS", false)?;
        let cookie_secure = parse_flag(&lookup, "COOKIE_SECURE", true)?;

        Ok(Self {
            environment,
            database_url,
            host,
            port,
            jwt,
            allowed_origins,
            password_hasher,
            allow_real_name_edits,
            cookie_secure,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag<F>(lookup: &F, name: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => Err(ConfigError::Invalid {
                name,
                reason: format!("expected a boolean, got '{}'", other),
            }),
        },
    }
}
