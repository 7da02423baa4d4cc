use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::{
    RegisterUserCommand, RegisterUserError, RegisteredUser,
};
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct RegisterUserDto {
    #[schema(example = "Ada")]
    pub first_name: String,

    #[schema(example = "Lovelace")]
    pub last_name: String,

    #[schema(example = "ada@example.com")]
    pub email: String,

    /// 8 to 72 bytes
    #[schema(example = "TinToys1985!")]
    pub password: String,

    /// Public handle, unique across the marketplace
    #[schema(example = "ToyBox")]
    pub display_name: String,
}

/// Register a new user
///
/// Creates the account and its public profile in one transaction.
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "User registered", body = inline(SuccessResponse<RegisteredUser>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (
            status = 409,
            description = "Email or display name already taken",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "EMAIL_ALREADY_EXISTS",
                    "message": "Email already in use"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/users")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match RegisterUserCommand::new(
        dto.first_name,
        dto.last_name,
        dto.email,
        dto.password,
        dto.display_name,
    ) {
        Ok(cmd) => cmd,
        Err(e) => {
            warn!(reason = %e, "Registration rejected");
            return ApiResponse::bad_request(e.code(), &e.to_string());
        }
    };

    info!(email = %command.email(), "Registering user");

    match data.register_user_use_case.execute(command).await {
        Ok(user) => {
            info!(user_id = %user.id, "User registered");
            ApiResponse::created(user)
        }
        Err(err) => map_register_error(err),
    }
}

fn map_register_error(err: RegisterUserError) -> HttpResponse {
    match err {
        RegisterUserError::EmailAlreadyExists => {
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", "Email already in use")
        }
        RegisterUserError::DisplayNameAlreadyExists => {
            ApiResponse::conflict("DISPLAY_NAME_ALREADY_EXISTS", "Display name already in use")
        }
        RegisterUserError::HashingFailed(ref e) => {
            error!(error = %e, "Password hashing failed during registration");
            ApiResponse::internal_error()
        }
        RegisterUserError::RepositoryError(ref e) => {
            error!(error = %e, "Repository error during registration");
            ApiResponse::internal_error()
        }
    }
}
