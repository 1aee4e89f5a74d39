use actix_web::{get, post, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::favorites::adapter::incoming::web::dto::{
    CheckFavoritesRequest, CheckFavoritesResponse, FavoriteStatusResponse,
};
use crate::favorites::application::ports::incoming::use_cases::CheckFavoritesError;
use crate::shared::api::ApiResponse;
use crate::vehicle::adapter::incoming::web::dto::parse_vehicle_id;
use crate::AppState;

/// Favorite flags for a batch of vehicles. Every requested id is answered.
#[utoipa::path(
    post,
    path = "/api/favorites/check",
    tag = "favorites",
    security(("bearer_auth" = [])),
    request_body = CheckFavoritesRequest,
    responses(
        (status = 200, description = "Map of vehicle id to flag", body = inline(SuccessResponse<CheckFavoritesResponse>)),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
    )
)]
#[post("/api/favorites/check")]
pub async fn check_favorites_handler(
    user: AuthenticatedUser,
    payload: web::Json<CheckFavoritesRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let ids = payload.into_inner().vehicle_ids;

    match data.favorites.check.execute(user.user_id, ids).await {
        Ok(favorites) => ApiResponse::success(CheckFavoritesResponse { favorites }),
        Err(CheckFavoritesError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to check favorites");
            ApiResponse::internal_error_with(data.expose_error_details, e)
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/favorites/check/{vehicle_id}",
    tag = "favorites",
    security(("bearer_auth" = [])),
    params(("vehicle_id" = i64, Path, description = "Vehicle id")),
    responses(
        (status = 200, description = "Whether the vehicle is saved", body = inline(SuccessResponse<FavoriteStatusResponse>)),
        (status = 400, description = "Id is not numeric", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
    )
)]
#[get("/api/favorites/check/{vehicle_id}")]
pub async fn check_favorite_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(vehicle_id) = parse_vehicle_id(&path) else {
        return ApiResponse::bad_request("INVALID_ID", "Vehicle id must be a number");
    };

    match data
        .favorites
        .check
        .execute(user.user_id, vec![vehicle_id])
        .await
    {
        Ok(flags) => ApiResponse::success(FavoriteStatusResponse {
            is_favorite: flags.get(&vehicle_id).copied().unwrap_or(false),
        }),
        Err(CheckFavoritesError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to check favorite");
            ApiResponse::internal_error_with(data.expose_error_details, e)
        }
    }
}
