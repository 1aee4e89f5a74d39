use crate::shared::api::{ApiResponse, MessageResponse};
use crate::AppState;
use actix_web::{post, web, Responder};
use tracing::info;

/// Logout
///
/// Clears the session cookies. Tokens are stateless, so this always succeeds.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Cookies cleared", body = inline(crate::api::schemas::SuccessResponse<MessageResponse>)),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_user_handler(data: web::Data<AppState>) -> impl Responder {
    info!("User logout");
    data.cookies
        .cleared(ApiResponse::success(MessageResponse::new("logged out")))
}
