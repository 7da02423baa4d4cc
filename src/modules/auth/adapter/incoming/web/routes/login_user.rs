use actix_web::{post, web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{LoginCommand, LoginError};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Login request from client
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    /// Email address
    #[schema(example = "collector@example.com")]
    pub email: String,

    /// Password
    #[schema(example = "TinToys1985!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "Login successful")]
    message: String,

    /// ID of the authenticated user
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    user_id: Uuid,

    /// When the session cookie stops being accepted
    expires_at: DateTime<Utc>,
}

/// User login
///
/// Checks email and password, then sets the `auth_token` session cookie (valid 24 hours).
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful, session cookie set",
            body = inline(SuccessResponse<LoginResponse>),
        ),
        (
            status = 400,
            description = "Malformed payload",
            body = ErrorResponse,
        ),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid email or password"
                }
            })
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
        ),
    )
)]
#[post("/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(email = %dto.email, "Login attempt");

    let command = match LoginCommand::new(dto.email, dto.password) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.login_user_use_case.execute(command).await {
        Ok(output) => {
            info!(user_id = %output.user_id, "User logged in successfully");

            let cookie = data.session_cookie.issue(&output.session);
            ApiResponse::success_with_cookie(
                LoginResponse {
                    message: "Login successful".to_string(),
                    user_id: output.user_id.value(),
                    expires_at: output.session.expires_at,
                },
                cookie,
            )
        }
        Err(err) => map_login_error(err),
    }
}

fn map_login_error(err: LoginError) -> HttpResponse {
    match err {
        LoginError::InvalidCredentials => {
            warn!("Login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }
        LoginError::PasswordVerificationFailed(ref e) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }
        LoginError::TokenGenerationFailed(ref e) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }
        LoginError::QueryError(ref e) => {
            error!(error = %e, "Database query error during login");
            ApiResponse::internal_error()
        }
    }
}
