use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::HttpResponse;
use tracing::error;

pub const ACCESS_TOKEN_COOKIE: &str = "access_token";
pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";

/// Attributes shared by the auth cookies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CookieSettings {
    pub secure: bool,
    pub domain: Option<String>,
    pub access_max_age_secs: i64,
    pub refresh_max_age_secs: i64,
}

impl CookieSettings {
    fn build(&self, name: &'static str, value: String, max_age_secs: i64) -> Cookie<'static> {
        let mut cookie = Cookie::build(name, value)
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .max_age(Duration::seconds(max_age_secs))
            .finish();

        if let Some(domain) = &self.domain {
            cookie.set_domain(domain.clone());
        }
        cookie
    }

    pub fn access_cookie(&self, token: &str) -> Cookie<'static> {
        self.build(
            ACCESS_TOKEN_COOKIE,
            token.to_string(),
            self.access_max_age_secs,
        )
    }

    pub fn refresh_cookie(&self, token: &str) -> Cookie<'static> {
        self.build(
            REFRESH_TOKEN_COOKIE,
            token.to_string(),
            self.refresh_max_age_secs,
        )
    }

    /// Sets both session cookies on an already built response.
    pub fn with_session(
        &self,
        response: HttpResponse,
        access_token: &str,
        refresh_token: &str,
    ) -> HttpResponse {
        self.add_all(
            response,
            [
                self.access_cookie(access_token),
                self.refresh_cookie(refresh_token),
            ],
        )
    }

    /// Expires both session cookies.
    pub fn cleared(&self, response: HttpResponse) -> HttpResponse {
        self.add_all(
            response,
            [
                self.build(ACCESS_TOKEN_COOKIE, String::new(), 0),
                self.build(REFRESH_TOKEN_COOKIE, String::new(), 0),
            ],
        )
    }

    fn add_all<const N: usize>(
        &self,
        mut response: HttpResponse,
        cookies: [Cookie<'static>; N],
    ) -> HttpResponse {
        for cookie in cookies {
            if let Err(e) = response.add_cookie(&cookie) {
                error!(cookie = cookie.name(), error = %e, "Failed to set cookie");
            }
        }
        response
    }
}
