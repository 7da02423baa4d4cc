use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponse, LogoutResponse,
};
use crate::auth::adapter::incoming::web::AUTH_COOKIE_NAME;
use crate::marker::application::domain::entities::{MarkerOwner, MarkerWithOwner};
use crate::user::adapter::incoming::web::routes::{
    DeleteUserResponse, RegisterUserDto, UpdateProfileDto, UpdateProfileResponse,
};
use crate::user::application::ports::incoming::use_cases::RegisteredUser;
use crate::user::application::ports::outgoing::{ProfileDetail, ProfileSummary, UserDetail};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vintage Toy Marketplace API",
        version = "1.0.0",
        description = "Users, public profiles and map markers for the vintage toy marketplace",
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::logout_user_handler,

        // User endpoints
        crate::user::adapter::incoming::web::routes::register_user_handler,
        crate::user::adapter::incoming::web::routes::list_profiles_handler,
        crate::user::adapter::incoming::web::routes::search_profiles_handler,
        crate::user::adapter::incoming::web::routes::get_current_user_handler,
        crate::user::adapter::incoming::web::routes::update_profile_handler,
        crate::user::adapter::incoming::web::routes::delete_user_handler,

        // Marker endpoints
        crate::marker::adapter::incoming::web::routes::list_markers_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<RegisteredUser>,
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            LoginRequestDto,
            LoginResponse,
            LogoutResponse,

            // User DTOs
            RegisterUserDto,
            RegisteredUser,
            UpdateProfileDto,
            UpdateProfileResponse,
            DeleteUserResponse,
            ProfileSummary,
            ProfileDetail,
            UserDetail,

            // Marker DTOs
            MarkerOwner,
            MarkerWithOwner,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Session endpoints"),
        (name = "users", description = "Registration and profile endpoints"),
        (name = "markers", description = "Map marker endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "cookieAuth",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(AUTH_COOKIE_NAME))),
            );
            components.add_security_scheme(
                "bearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Session token, also accepted as a header"))
                        .build(),
                ),
            );
        }
    }
}
