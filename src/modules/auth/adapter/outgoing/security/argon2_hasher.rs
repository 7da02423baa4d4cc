use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand_core::OsRng;

use crate::auth::application::ports::outgoing::password_hasher::{
    HashError, PasswordHasher as HasherTrait,
};

// Budget VPS friendly: 4MB memory, 3 iterations, 1 thread
const MEMORY_KIB: u32 = 4 * 1024;
const ITERATIONS: u32 = 3;
const PARALLELISM: u32 = 1;

const TIMING_GUARD_INPUT: &str = "timing-guard-password";

#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
    timing_guard: Option<String>,
    #[cfg(test)]
    salt_override: Option<SaltString>,
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Argon2Hasher {
    pub fn new() -> Self {
        let params = Params::new(MEMORY_KIB, ITERATIONS, PARALLELISM, None).unwrap_or_default();
        Self::from_params(params)
    }

    /// Create with custom params (for testing or different environments)
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, HashError> {
        Params::new(memory_kib, iterations, parallelism, None)
            .map(Self::from_params)
            .map_err(|_| HashError::HashFailed)
    }

    fn from_params(params: Params) -> Self {
        let salt = SaltString::generate(&mut OsRng);
        let timing_guard = hash_with(&params, TIMING_GUARD_INPUT, &salt).ok();

        Self {
            params,
            timing_guard,
            #[cfg(test)]
            salt_override: None,
        }
    }

    #[cfg(test)]
    pub fn with_fixed_salt(salt: &str) -> Self {
        Self {
            salt_override: Some(SaltString::from_b64(salt).expect("Invalid salt")),
            ..Self::new()
        }
    }
}

fn hash_with(params: &Params, password: &str, salt: &SaltString) -> Result<String, HashError> {
    Argon2::new(Algorithm::Argon2id, Version::V0x13, params.clone())
        .hash_password(password.as_bytes(), salt)
        .map(|hash| hash.to_string())
        .map_err(|_| HashError::HashFailed)
}

fn verify_with(password: &str, hash: &str) -> Result<bool, HashError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| HashError::VerifyFailed)?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(_) => Ok(true),
        Err(PasswordHashError::Password) => Ok(false),
        Err(_) => Err(HashError::VerifyFailed),
    }
}

#[async_trait]
impl HasherTrait for Argon2Hasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let params = self.params.clone();

        #[cfg(test)]
        let salt_override = self.salt_override.clone();

        tokio::task::spawn_blocking(move || {
            #[cfg(test)]
            let salt = salt_override.unwrap_or_else(|| SaltString::generate(&mut OsRng));

            #[cfg(not(test))]
            let salt = SaltString::generate(&mut OsRng);

            hash_with(&params, &password, &salt)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || verify_with(&password, &hash))
            .await
            .map_err(|_| HashError::TaskFailed)?
    }

    async fn equalize_timing(&self, password: &str) {
        if let Some(guard) = &self.timing_guard {
            let _ = self.verify_password(password, guard).await;
        }
    }
}
