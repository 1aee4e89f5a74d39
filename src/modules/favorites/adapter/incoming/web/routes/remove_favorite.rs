use actix_web::{delete, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::favorites::application::ports::incoming::use_cases::RemoveFavoriteError;
use crate::shared::api::{ApiResponse, MessageResponse};
use crate::vehicle::adapter::incoming::web::dto::parse_vehicle_id;
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/favorites/{vehicle_id}",
    tag = "favorites",
    security(("bearer_auth" = [])),
    params(("vehicle_id" = i64, Path, description = "Vehicle id")),
    responses(
        (status = 200, description = "Removed, or was never saved", body = inline(SuccessResponse<MessageResponse>)),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
    )
)]
#[delete("/api/favorites/{vehicle_id}")]
pub async fn remove_favorite_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(vehicle_id) = parse_vehicle_id(&path) else {
        return ApiResponse::bad_request("INVALID_ID", "Vehicle id must be a number");
    };

    match data.favorites.remove.execute(user.user_id, vehicle_id).await {
        Ok(()) => ApiResponse::success(MessageResponse::new("removed from favorites")),
        Err(RemoveFavoriteError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to remove favorite");
            ApiResponse::internal_error_with(data.expose_error_details, e)
        }
    }
}
