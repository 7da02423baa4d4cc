use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::GetPublicSummariesError;
use crate::user::application::ports::outgoing::ProfileSummary;
use crate::AppState;

/// List public profiles
///
/// Anonymized summaries of every active user. Never includes email or real name.
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "Public profile summaries", body = inline(SuccessResponse<Vec<ProfileSummary>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/users")]
pub async fn list_profiles_handler(data: web::Data<AppState>) -> impl Responder {
    match data.get_public_summaries_use_case.execute().await {
        Ok(summaries) => ApiResponse::success(summaries),
        Err(GetPublicSummariesError::QueryError(e)) => {
            error!(error = %e, "Failed to list public profiles");
            ApiResponse::internal_error()
        }
    }
}
