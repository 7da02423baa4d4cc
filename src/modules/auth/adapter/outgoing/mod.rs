pub mod credential_query_postgres;
pub mod jwt;
pub mod security;

pub use credential_query_postgres::CredentialQueryPostgres;
