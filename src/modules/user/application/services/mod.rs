mod register_user_service;
mod soft_delete_user_service;
mod update_profile_service;
mod user_query_services;

pub use register_user_service::RegisterUserService;
pub use soft_delete_user_service::SoftDeleteUserService;
pub use update_profile_service::UpdateProfileService;
pub use user_query_services::{
    GetCurrentUserService, GetPublicSummariesService, SearchProfilesService,
};
