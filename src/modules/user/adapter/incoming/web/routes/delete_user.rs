use actix_web::{delete, web, Responder};
use serde::Serialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::user::application::domain::entities::SoftDeleteOutcome;
use crate::user::application::ports::incoming::use_cases::SoftDeleteUserError;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct DeleteUserResponse {
    #[schema(example = "Account deleted successfully")]
    message: String,
}

/// Delete own account
///
/// Soft delete. Repeating the call succeeds and says the account was already deleted.
#[utoipa::path(
    delete,
    path = "/api/user",
    tag = "users",
    security(("cookieAuth" = []), ("bearerAuth" = [])),
    responses(
        (status = 200, description = "Account deleted", body = inline(SuccessResponse<DeleteUserResponse>)),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/user")]
pub async fn delete_user_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.soft_delete_user_use_case.execute(user.user_id).await {
        Ok(outcome) => {
            let message = match outcome {
                SoftDeleteOutcome::Deleted => {
                    info!(user_id = %user.user_id, "Account soft-deleted");
                    "Account deleted successfully"
                }
                SoftDeleteOutcome::AlreadyDeleted => {
                    info!(user_id = %user.user_id, "Account was already deleted");
                    "Account was already deleted"
                }
            };
            ApiResponse::success(DeleteUserResponse {
                message: message.to_string(),
            })
        }
        Err(SoftDeleteUserError::UserNotFound) => {
            warn!(user_id = %user.user_id, "Delete requested for unknown user");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(SoftDeleteUserError::RepositoryError(e)) => {
            error!(error = %e, "Failed to soft-delete user");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::test_helpers::{
        session_cookie_for, test_token_provider,
    };
    use crate::user::application::ports::incoming::use_cases::SoftDeleteUserUseCase;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    struct FixedOutcome(Result<SoftDeleteOutcome, SoftDeleteUserError>);

    #[async_trait]
    impl SoftDeleteUserUseCase for FixedOutcome {
        async fn execute(
            &self,
            _user_id: UserId,
        ) -> Result<SoftDeleteOutcome, SoftDeleteUserError> {
            self.0.clone()
        }
    }

    async fn delete_with(
        result: Result<SoftDeleteOutcome, SoftDeleteUserError>,
    ) -> (StatusCode, serde_json::Value) {
        let state = TestAppStateBuilder::default()
            .with_soft_delete_user(FixedOutcome(result))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(test_token_provider())
                .service(delete_user_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/user")
            .cookie(session_cookie_for(UserId::new()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let json: serde_json::Value = test::read_body_json(resp).await;
        (status, json)
    }

    #[actix_web::test]
    async fn first_delete_confirms() {
        let (status, json) = delete_with(Ok(SoftDeleteOutcome::Deleted)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["message"], "Account deleted successfully");
    }

    #[actix_web::test]
    async fn repeated_delete_still_succeeds() {
        let (status, json) = delete_with(Ok(SoftDeleteOutcome::AlreadyDeleted)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["message"], "Account was already deleted");
    }

    #[actix_web::test]
    async fn unknown_user_is_not_found() {
        let (status, json) = delete_with(Err(SoftDeleteUserError::UserNotFound)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "USER_NOT_FOUND");
    }

    #[actix_web::test]
    async fn requires_session() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(test_token_provider())
                .service(delete_user_handler),
        )
        .await;

        let req = test::TestRequest::delete().uri("/api/user").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
