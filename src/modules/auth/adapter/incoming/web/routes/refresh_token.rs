use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::cookies::REFRESH_TOKEN_COOKIE;
use crate::auth::adapter::incoming::web::dto::{RefreshTokenBody, SessionResponse};
use crate::auth::application::use_cases::refresh_token::{RefreshTokenError, RefreshTokenRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpRequest, Responder};
use tracing::{error, info, warn};

/// Refresh access token
///
/// Reads the refresh token from the `refresh_token` cookie, falling back to
/// the JSON body. Issues a new access token and rotates the refresh token.
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = "auth",
    request_body(content = RefreshTokenBody, description = "Only needed when the cookie is not sent"),
    responses(
        (status = 200, description = "Token refreshed", body = inline(SuccessResponse<SessionResponse>)),
        (
            status = 401,
            description = "Missing, invalid or expired refresh token",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_REFRESH_TOKEN",
                    "message": "Invalid or expired refresh token"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/refresh")]
pub async fn refresh_token_handler(
    http: HttpRequest,
    body: Option<web::Json<RefreshTokenBody>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let raw = http
        .cookie(REFRESH_TOKEN_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|v| !v.trim().is_empty())
        .or_else(|| body.and_then(|b| b.into_inner().refresh_token));

    let request = match raw.map(RefreshTokenRequest::new) {
        Some(Ok(request)) => request,
        _ => {
            warn!("Token refresh failed: no refresh token presented");
            return ApiResponse::unauthorized("MISSING_REFRESH_TOKEN", "Refresh token required");
        }
    };

    info!("Token refresh attempt");

    match data.auth.refresh.execute(request).await {
        Ok(session) => {
            info!(user_id = %session.user.id, "Token refreshed successfully");
            data.cookies.with_session(
                ApiResponse::success(SessionResponse::from(&session)),
                &session.access_token,
                &session.refresh_token,
            )
        }

        Err(RefreshTokenError::InvalidRefreshToken) => {
            warn!("Token refresh failed: invalid refresh token");
            ApiResponse::unauthorized("INVALID_REFRESH_TOKEN", "Invalid or expired refresh token")
        }

        Err(RefreshTokenError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed during refresh");
            ApiResponse::internal_error_with(data.expose_error_details, e)
        }

        Err(RefreshTokenError::QueryError(ref e)) => {
            error!(error = %e, "User lookup failed during refresh");
            ApiResponse::internal_error_with(data.expose_error_details, e)
        }
    }
}
