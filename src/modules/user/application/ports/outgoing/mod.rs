pub mod user_query;
pub mod user_repository;

pub use user_query::{ProfileDetail, ProfileSummary, UserDetail, UserQuery, UserQueryError};
pub use user_repository::{NewUserRecord, ProfileChanges, UserRepository, UserRepositoryError};
