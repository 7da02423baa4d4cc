pub mod credential_query;
pub mod password_hasher;
pub mod token_provider;

pub use credential_query::{CredentialQuery, CredentialQueryError, UserCredentials};
pub use password_hasher::{HashError, PasswordHasher};
pub use token_provider::{TokenClaims, TokenError, TokenProvider};
