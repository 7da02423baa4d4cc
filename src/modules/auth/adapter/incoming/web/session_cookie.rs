use actix_web::cookie::{
    time::{Duration as CookieDuration, OffsetDateTime},
    Cookie, SameSite,
};

use crate::auth::adapter::outgoing::jwt::TOKEN_TTL_HOURS;
use crate::auth::application::domain::entities::IssuedToken;

pub const AUTH_COOKIE_NAME: &str = "auth_token";

/// Builds the `auth_token` cookie that carries the session token.
#[derive(Debug, Clone, Copy)]
pub struct SessionCookie {
    secure: bool,
}

impl SessionCookie {
    pub fn new(secure: bool) -> Self {
        Self { secure }
    }

    pub fn issue(&self, session: &IssuedToken) -> Cookie<'static> {
        let mut cookie = Cookie::build(AUTH_COOKIE_NAME, session.token.clone())
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Strict)
            .path("/")
            .max_age(CookieDuration::hours(TOKEN_TTL_HOURS))
            .finish();

        if let Ok(expires) = OffsetDateTime::from_unix_timestamp(session.expires_at.timestamp()) {
            cookie.set_expires(expires);
        }

        cookie
    }

    /// An empty, already-expired cookie that makes the browser drop the session.
    pub fn clear(&self) -> Cookie<'static> {
        Cookie::build(AUTH_COOKIE_NAME, "")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Strict)
            .path("/")
            .max_age(CookieDuration::ZERO)
            .expires(OffsetDateTime::UNIX_EPOCH)
            .finish()
    }
}

impl Default for SessionCookie {
    fn default() -> Self {
        Self::new(true)
    }
}
