use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use tracing::{debug, warn};

use crate::auth::adapter::incoming::web::session_cookie::AUTH_COOKIE_NAME;
use crate::auth::application::{
    domain::entities::UserId, ports::outgoing::token_provider::TokenProvider,
};
use crate::shared::api::ApiResponse;

/// Identity resolved from the session token on the request.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider = match req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        {
            Some(provider) => provider,
            None => {
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        // Cookie first, then Authorization header
        let token = match extract_token_from_cookie(req).or_else(|| extract_token_from_header(req))
        {
            Some(t) => t,
            None => {
                debug!(path = %req.path(), "Rejected request without session token");
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_TOKEN",
                    "Missing token",
                ))));
            }
        };

        match token_provider.verify_token(&token) {
            Ok(user_id) => ready(Ok(AuthenticatedUser { user_id })),
            Err(e) => {
                warn!(path = %req.path(), reason = %e, "Rejected request with invalid session token");
                ready(Err(create_api_error(ApiResponse::unauthorized(
                    "INVALID_TOKEN",
                    "Invalid or expired token",
                ))))
            }
        }
    }
}

fn extract_token_from_cookie(req: &HttpRequest) -> Option<String> {
    req.cookie(AUTH_COOKIE_NAME)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
