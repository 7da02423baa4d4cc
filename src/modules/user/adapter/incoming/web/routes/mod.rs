mod delete_user;
mod get_current_user;
mod list_profiles;
mod register_user;
mod search_profiles;
mod update_profile;

pub use delete_user::*;
pub use get_current_user::*;
pub use list_profiles::*;
pub use register_user::*;
pub use search_profiles::*;
pub use update_profile::*;
