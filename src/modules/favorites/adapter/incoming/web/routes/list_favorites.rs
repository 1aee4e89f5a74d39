use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, PaginatedResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::favorites::adapter::incoming::web::dto::FavoriteListQuery;
use crate::favorites::application::ports::incoming::use_cases::ListFavoritesError;
use crate::shared::api::ApiResponse;
use crate::vehicle::application::domain::entities::Vehicle;
use crate::AppState;

/// The caller's favorited vehicles, most recently saved first
#[utoipa::path(
    get,
    path = "/api/favorites",
    tag = "favorites",
    security(("bearer_auth" = [])),
    params(FavoriteListQuery),
    responses(
        (status = 200, description = "One page of favorites", body = inline(PaginatedResponse<Vehicle>)),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
    )
)]
#[get("/api/favorites")]
pub async fn list_favorites_handler(
    user: AuthenticatedUser,
    query: web::Query<FavoriteListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .favorites
        .list
        .execute(user.user_id, query.page_request())
        .await
    {
        Ok(result) => {
            let pagination = result.pagination();
            ApiResponse::paginated(result.items, pagination)
        }
        Err(ListFavoritesError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to list favorites");
            ApiResponse::internal_error_with(data.expose_error_details, e)
        }
    }
}
