use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::marker::application::domain::entities::MarkerWithOwner;
use crate::marker::application::ports::incoming::use_cases::GetMarkersError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List markers
///
/// Markers of active users with owner info. First and last name appear only
/// for owners who chose to show their real name.
#[utoipa::path(
    get,
    path = "/markers",
    tag = "markers",
    responses(
        (status = 200, description = "Markers with owner info", body = inline(SuccessResponse<Vec<MarkerWithOwner>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/markers")]
pub async fn list_markers_handler(data: web::Data<AppState>) -> impl Responder {
    match data.get_markers_use_case.execute().await {
        Ok(markers) => ApiResponse::success(markers),
        Err(GetMarkersError::QueryError(e)) => {
            error!(error = %e, "Failed to list markers");
            ApiResponse::internal_error()
        }
    }
}
