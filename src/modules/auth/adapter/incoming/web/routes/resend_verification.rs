use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::use_cases::resend_verification::ResendVerificationError;
use crate::shared::api::{ApiResponse, MessageResponse};
use crate::AppState;
use actix_web::{post, web, Responder};
use tracing::{error, info, warn};

pub const VERIFICATION_RESENT_MESSAGE: &str = "인증 이메일을 재발송했습니다";

/// Resend verification email
///
/// Issues a fresh token for the authenticated user. Earlier tokens stay valid
/// until they expire.
#[utoipa::path(
    post,
    path = "/api/auth/resend-verification",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Verification email queued", body = inline(SuccessResponse<MessageResponse>)),
        (status = 400, description = "Email already verified", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "User no longer exists", body = ErrorResponse),
    )
)]
#[post("/api/auth/resend-verification")]
pub async fn resend_verification_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.resend_verification.execute(user.user_id).await {
        Ok(()) => {
            info!(user_id = %user.user_id, "Verification email re-issued");
            ApiResponse::success(MessageResponse::new(VERIFICATION_RESENT_MESSAGE))
        }
        Err(ResendVerificationError::AlreadyVerified) => {
            warn!(user_id = %user.user_id, "Resend requested for verified email");
            ApiResponse::bad_request("ALREADY_VERIFIED", "Email already verified")
        }
        Err(ResendVerificationError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(ResendVerificationError::QueryError(ref e))
        | Err(ResendVerificationError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to resend verification email");
            ApiResponse::internal_error_with(data.expose_error_details, e)
        }
    }
}
