use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::{debug, error};
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::{
    SearchProfilesError, SearchProfilesQuery,
};
use crate::user::application::ports::outgoing::ProfileSummary;
use crate::AppState;

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Matched case-insensitively against display name and store name
    pub q: Option<String>,
}

/// Search public profiles
///
/// Returns at most 10 matches.
#[utoipa::path(
    get,
    path = "/users/search",
    tag = "users",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching profiles", body = inline(SuccessResponse<Vec<ProfileSummary>>)),
        (
            status = 400,
            description = "Missing search text",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "MISSING_SEARCH_QUERY",
                    "message": "Missing search query"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/users/search")]
pub async fn search_profiles_handler(
    params: web::Query<SearchParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = match SearchProfilesQuery::new(params.q.as_deref()) {
        Ok(q) => q,
        Err(e) => return ApiResponse::bad_request("MISSING_SEARCH_QUERY", &e.to_string()),
    };

    debug!(term = %query.term(), "Searching profiles");

    match data.search_profiles_use_case.execute(query).await {
        Ok(results) => ApiResponse::success(results),
        Err(SearchProfilesError::QueryError(e)) => {
            error!(error = %e, "Profile search failed");
            ApiResponse::internal_error()
        }
    }
}
