use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

use crate::api::schemas::SuccessResponse;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct LogoutResponse {
    #[schema(example = "Logged out successfully")]
    message: String,
}

/// Logout
///
/// Overwrites the session cookie with an empty, already-expired value.
/// The token itself stays valid until it expires.
#[utoipa::path(
    post,
    path = "/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Session cookie cleared", body = inline(SuccessResponse<LogoutResponse>)),
    )
)]
#[post("/logout")]
pub async fn logout_user_handler(data: web::Data<AppState>) -> impl Responder {
    info!("User logout");

    ApiResponse::success_with_cookie(
        LogoutResponse {
            message: "Logged out successfully".to_string(),
        },
        data.session_cookie.clear(),
    )
}
