use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::PublicUser;
use crate::auth::application::use_cases::get_current_user::GetCurrentUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::{error, warn};

/// Current user
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The authenticated user", body = inline(SuccessResponse<PublicUser>)),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "User no longer exists", body = ErrorResponse),
    )
)]
#[get("/api/auth/me")]
pub async fn get_current_user_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.get_current_user.execute(user.user_id).await {
        Ok(found) => ApiResponse::success(PublicUser::from(found)),
        Err(GetCurrentUserError::NotFound) => {
            warn!(user_id = %user.user_id, "Token subject no longer exists");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(GetCurrentUserError::QueryError(ref e)) => {
            error!(error = %e, "Failed to load current user");
            ApiResponse::internal_error_with(data.expose_error_details, e)
        }
    }
}
