pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::marker;
pub use modules::user;

use crate::auth::adapter::incoming::web::SessionCookie;
use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::adapter::outgoing::security::{Argon2Hasher, BcryptHasher};
use crate::auth::adapter::outgoing::CredentialQueryPostgres;
use crate::auth::application::ports::incoming::use_cases::LoginUserUseCase;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::services::LoginUserService;
use crate::config::{AppConfig, HasherKind};
use crate::marker::adapter::outgoing::MarkerQueryPostgres;
use crate::marker::application::ports::incoming::use_cases::GetMarkersUseCase;
use crate::marker::application::services::GetMarkersService;
use crate::user::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};
use crate::user::application::ports::incoming::use_cases::{
    GetCurrentUserUseCase, GetPublicSummariesUseCase, RegisterUserUseCase, SearchProfilesUseCase,
    SoftDeleteUserUseCase, UpdateProfileUseCase,
};
use crate::user::application::services::{
    GetCurrentUserService, GetPublicSummariesService, RegisterUserService, SearchProfilesService,
    SoftDeleteUserService, UpdateProfileService,
};

use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub login_user_use_case: Arc<dyn LoginUserUseCase + Send + Sync>,
    pub register_user_use_case: Arc<dyn RegisterUserUseCase + Send + Sync>,
    pub update_profile_use_case: Arc<dyn UpdateProfileUseCase + Send + Sync>,
    pub soft_delete_user_use_case: Arc<dyn SoftDeleteUserUseCase + Send + Sync>,
    pub get_current_user_use_case: Arc<dyn GetCurrentUserUseCase + Send + Sync>,
    pub get_public_summaries_use_case: Arc<dyn GetPublicSummariesUseCase + Send + Sync>,
    pub search_profiles_use_case: Arc<dyn SearchProfilesUseCase + Send + Sync>,
    pub get_markers_use_case: Arc<dyn GetMarkersUseCase + Send + Sync>,
    pub session_cookie: SessionCookie,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().context("invalid configuration")?;
    info!(environment = %config.environment, "Configuration loaded");

    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("failed to connect to database")?;

    let db_arc = Arc::new(conn);

    let password_hasher: Arc<dyn PasswordHasher + Send + Sync> = match config.password_hasher {
        HasherKind::Bcrypt => Arc::new(BcryptHasher::new()),
        HasherKind::Argon2 => Arc::new(Argon2Hasher::new()),
    };
    let token_provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(config.jwt.clone()));

    // Outgoing adapters
    let credential_query = CredentialQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let marker_query = MarkerQueryPostgres::new(Arc::clone(&db_arc));

    let state = AppState {
        login_user_use_case: Arc::new(LoginUserService::new(
            credential_query,
            Arc::clone(&password_hasher),
            Arc::clone(&token_provider),
        )),
        register_user_use_case: Arc::new(RegisterUserService::new(
            user_repo.clone(),
            Arc::clone(&password_hasher),
        )),
        update_profile_use_case: Arc::new(UpdateProfileService::new(
            user_repo.clone(),
            config.allow_real_name_edits,
        )),
        soft_delete_user_use_case: Arc::new(SoftDeleteUserService::new(user_repo)),
        get_current_user_use_case: Arc::new(GetCurrentUserService::new(user_query.clone())),
        get_public_summaries_use_case: Arc::new(GetPublicSummariesService::new(
            user_query.clone(),
        )),
        search_profiles_use_case: Arc::new(SearchProfilesService::new(user_query)),
        get_markers_use_case: Arc::new(GetMarkersService::new(marker_query)),
        session_cookie: SessionCookie::new(config.cookie_secure),
    };

    let allowed_origins = config.allowed_origins.clone();
    let openapi = api::openapi::ApiDoc::openapi();

    info!(address = %server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&allowed_origins))
            .wrap(Logger::default())
            .app_data(shared::api::custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

/// Credentialed CORS limited to the configured origins.
fn build_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
        .supports_credentials()
        .max_age(3600)
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_user_handler);
    // Users
    cfg.service(crate::user::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::search_profiles_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::list_profiles_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::get_current_user_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::update_profile_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::delete_user_handler);
    // Markers
    cfg.service(crate::marker::adapter::incoming::web::routes::list_markers_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
