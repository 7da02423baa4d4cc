use actix_web::{patch, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::{
    UpdateProfileCommand, UpdateProfileError, UpdateProfileInput,
};
use crate::AppState;

/// Partial profile update. Omitted fields keep their current value.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProfileDto {
    #[schema(example = "TinRobot")]
    pub display_name: Option<String>,
    #[schema(example = "Tin Robot Emporium")]
    pub store_name: Option<String>,
    pub bio_description: Option<String>,
    pub profile_image: Option<String>,
    pub show_real_name: Option<bool>,
    /// Only accepted when real-name edits are enabled
    pub first_name: Option<String>,
    /// Only accepted when real-name edits are enabled
    pub last_name: Option<String>,
}

impl From<UpdateProfileDto> for UpdateProfileInput {
    fn from(dto: UpdateProfileDto) -> Self {
        UpdateProfileInput {
            display_name: dto.display_name,
            store_name: dto.store_name,
            bio_description: dto.bio_description,
            profile_image: dto.profile_image,
            show_real_name: dto.show_real_name,
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct UpdateProfileResponse {
    #[schema(example = "Profile updated successfully")]
    message: String,
}

/// Update own profile
#[utoipa::path(
    patch,
    path = "/api/user",
    tag = "users",
    security(("cookieAuth" = []), ("bearerAuth" = [])),
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = inline(SuccessResponse<UpdateProfileResponse>)),
        (status = 400, description = "Validation failed or name edits disabled", body = ErrorResponse),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
        (status = 404, description = "User not found or deleted", body = ErrorResponse),
        (status = 409, description = "Display name already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[patch("/api/user")]
pub async fn update_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateProfileDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match UpdateProfileCommand::new(user.user_id, req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request(e.code(), &e.to_string()),
    };

    match data.update_profile_use_case.execute(command).await {
        Ok(()) => {
            info!(user_id = %user.user_id, "Profile updated");
            ApiResponse::success(UpdateProfileResponse {
                message: "Profile updated successfully".to_string(),
            })
        }
        Err(err) => map_update_error(err),
    }
}

fn map_update_error(err: UpdateProfileError) -> HttpResponse {
    match err {
        UpdateProfileError::NameEditDisabled => ApiResponse::bad_request(
            "NAME_EDIT_DISABLED",
            "Editing first or last name is disabled",
        ),
        UpdateProfileError::DisplayNameAlreadyExists => {
            ApiResponse::conflict("DISPLAY_NAME_ALREADY_EXISTS", "Display name already in use")
        }
        UpdateProfileError::UserNotFound => {
            warn!("Profile update for missing or deleted user");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        UpdateProfileError::RepositoryError(ref e) => {
            error!(error = %e, "Repository error during profile update");
            ApiResponse::internal_error()
        }
    }
}
