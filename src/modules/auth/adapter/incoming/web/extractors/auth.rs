use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use tracing::{debug, error};

use crate::auth::adapter::incoming::web::cookies::ACCESS_TOKEN_COOKIE;
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::token_provider::{TokenError, TokenProvider};
use crate::shared::api::ApiResponse;

/// The caller behind a valid access token, verified or not.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub email: String,
    pub name: String,
    pub email_verified: bool,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, ActixError> {
    let Some(token_provider) = req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
    else {
        error!("TokenProvider is not registered as app data");
        return Err(create_api_error(ApiResponse::internal_error()));
    };

    let Some(token) = extract_token(req) else {
        return Err(create_api_error(ApiResponse::unauthorized(
            "MISSING_AUTH_TOKEN",
            "Missing authentication token",
        )));
    };

    let claims = match token_provider.verify_access_token(&token) {
        Ok(claims) => claims,
        Err(TokenError::InvalidTokenType(_)) => {
            return Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN_TYPE",
                "Invalid token type",
            )));
        }
        Err(e) => {
            debug!(error = %e, "Access token rejected");
            return Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )));
        }
    };

    let user_id = claims.user_id().map_err(|_| {
        create_api_error(ApiResponse::unauthorized(
            "INVALID_TOKEN",
            "Invalid or expired token",
        ))
    })?;

    Ok(AuthenticatedUser {
        user_id,
        email: claims.email,
        name: claims.name,
        email_verified: claims.email_verified,
    })
}

/// Bearer header first, then the `access_token` cookie.
fn extract_token(req: &HttpRequest) -> Option<String> {
    extract_token_from_header(req).or_else(|| {
        req.cookie(ACCESS_TOKEN_COOKIE)
            .map(|c| c.value().trim().to_string())
            .filter(|v| !v.is_empty())
    })
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
