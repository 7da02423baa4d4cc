#[cfg(test)]
pub mod test_helpers {
    use actix_web::{cookie::Cookie, web};
    use std::sync::Arc;

    use crate::auth::adapter::incoming::web::AUTH_COOKIE_NAME;
    use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
    use crate::auth::application::domain::entities::UserId;
    use crate::auth::application::ports::outgoing::TokenProvider;

    pub fn create_test_jwt_service() -> JwtTokenService {
        let jwt_config = JwtConfig::new("test_secret_key_for_testing_only_0123456789")
            .expect("test secret is long enough");
        JwtTokenService::new(jwt_config)
    }

    /// Token provider in the shape the `AuthenticatedUser` extractor looks up.
    pub fn test_token_provider() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
        let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(create_test_jwt_service());
        web::Data::new(provider)
    }

    pub fn session_cookie_for(user_id: UserId) -> Cookie<'static> {
        let issued = create_test_jwt_service()
            .issue_token(user_id)
            .expect("token issue should succeed");
        Cookie::new(AUTH_COOKIE_NAME, issued.token)
    }
}
