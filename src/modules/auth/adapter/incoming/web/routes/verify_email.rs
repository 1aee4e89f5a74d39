use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::dto::VerifyEmailQuery;
use crate::auth::application::use_cases::verify_email::VerifyEmailError;
use crate::shared::api::{ApiResponse, MessageResponse};
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::{error, info, warn};

pub const EMAIL_VERIFIED_MESSAGE: &str = "이메일 인증이 완료되었습니다";

/// Verify email address
///
/// Consumes a single-use token from the verification email.
#[utoipa::path(
    get,
    path = "/api/auth/verify-email",
    tag = "auth",
    params(VerifyEmailQuery),
    responses(
        (status = 200, description = "Email verified", body = inline(SuccessResponse<MessageResponse>)),
        (
            status = 400,
            description = "Token missing, already used or expired",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_OR_EXPIRED_TOKEN",
                    "message": "invalid or expired token"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/auth/verify-email")]
pub async fn verify_email_handler(
    query: web::Query<VerifyEmailQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let token = query.into_inner().token.unwrap_or_default();

    match data.auth.verify_email.execute(&token).await {
        Ok(user_id) => {
            info!(user_id = %user_id, "Email verified");
            ApiResponse::success(MessageResponse::new(EMAIL_VERIFIED_MESSAGE))
        }
        Err(e @ VerifyEmailError::TokenRequired) => {
            ApiResponse::bad_request("TOKEN_REQUIRED", &e.to_string())
        }
        Err(e @ VerifyEmailError::InvalidOrExpiredToken) => {
            warn!("Email verification failed: invalid or expired token");
            ApiResponse::bad_request("INVALID_OR_EXPIRED_TOKEN", &e.to_string())
        }
        Err(VerifyEmailError::RepositoryError(ref e)) => {
            error!(error = %e, "Email verification failed");
            ApiResponse::internal_error_with(data.expose_error_details, e)
        }
    }
}
