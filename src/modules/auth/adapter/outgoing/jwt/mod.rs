mod jwt_config;
mod jwt_service;

pub use jwt_config::{JwtConfig, MIN_SECRET_BYTES};
pub use jwt_service::{JwtTokenService, TOKEN_TTL_HOURS};
