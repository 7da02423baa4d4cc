use actix_web::{get, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::GetCurrentUserError;
use crate::user::application::ports::outgoing::UserDetail;
use crate::AppState;

/// Current user
///
/// Full profile of the authenticated caller, private fields included.
#[utoipa::path(
    get,
    path = "/api/user",
    tag = "users",
    security(("cookieAuth" = []), ("bearerAuth" = [])),
    responses(
        (status = 200, description = "Own profile", body = inline(SuccessResponse<UserDetail>)),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
        (status = 404, description = "User not found or deleted", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/user")]
pub async fn get_current_user_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.get_current_user_use_case.execute(user.user_id).await {
        Ok(detail) => ApiResponse::success(detail),
        Err(GetCurrentUserError::UserNotFound) => {
            warn!(user_id = %user.user_id, "Session subject has no active user");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(GetCurrentUserError::QueryError(e)) => {
            error!(error = %e, "Failed to load current user");
            ApiResponse::internal_error()
        }
    }
}
