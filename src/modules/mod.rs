pub mod auth;
pub mod marker;
pub mod user;
