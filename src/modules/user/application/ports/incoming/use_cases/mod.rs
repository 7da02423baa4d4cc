mod get_current_user_use_case;
mod get_public_summaries_use_case;
mod register_user_use_case;
mod search_profiles_use_case;
mod soft_delete_user_use_case;
mod update_profile_use_case;

pub use get_current_user_use_case::{GetCurrentUserError, GetCurrentUserUseCase};
pub use get_public_summaries_use_case::{GetPublicSummariesError, GetPublicSummariesUseCase};
pub use register_user_use_case::{
    RegisterUserCommand, RegisterUserError, RegisterUserUseCase, RegisteredUser,
};
pub use search_profiles_use_case::{
    SearchProfilesError, SearchProfilesQuery, SearchProfilesQueryError, SearchProfilesUseCase,
    SEARCH_RESULT_LIMIT,
};
pub use soft_delete_user_use_case::{SoftDeleteUserError, SoftDeleteUserUseCase};
pub use update_profile_use_case::{
    UpdateProfileCommand, UpdateProfileError, UpdateProfileInput, UpdateProfileUseCase,
};
