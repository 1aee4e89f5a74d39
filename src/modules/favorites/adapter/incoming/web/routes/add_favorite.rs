use actix_web::{post, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::favorites::application::ports::incoming::use_cases::AddFavoriteError;
use crate::shared::api::{ApiResponse, MessageResponse};
use crate::vehicle::adapter::incoming::web::dto::parse_vehicle_id;
use crate::AppState;

/// Save a vehicle to the caller's favorites. Saving twice is harmless.
#[utoipa::path(
    post,
    path = "/api/favorites/{vehicle_id}",
    tag = "favorites",
    security(("bearer_auth" = [])),
    params(("vehicle_id" = i64, Path, description = "Vehicle id")),
    responses(
        (status = 200, description = "Saved", body = inline(SuccessResponse<MessageResponse>)),
        (status = 400, description = "Id is not numeric", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "No such vehicle", body = ErrorResponse),
    )
)]
#[post("/api/favorites/{vehicle_id}")]
pub async fn add_favorite_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(vehicle_id) = parse_vehicle_id(&path) else {
        return ApiResponse::bad_request("INVALID_ID", "Vehicle id must be a number");
    };

    match data.favorites.add.execute(user.user_id, vehicle_id).await {
        Ok(()) => ApiResponse::success(MessageResponse::new("added to favorites")),
        Err(AddFavoriteError::VehicleNotFound) => {
            warn!(user_id = %user.user_id, vehicle_id, "Favorite for missing vehicle");
            ApiResponse::not_found("VEHICLE_NOT_FOUND", "Vehicle not found")
        }
        Err(AddFavoriteError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to add favorite");
            ApiResponse::internal_error_with(data.expose_error_details, e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::test_helpers::{bearer_for, token_provider_data};
    use crate::tests::support::stubs::StubAddFavoriteUseCase;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_add_favorite_success() {
        let app_state = TestAppStateBuilder::default()
            .with_add_favorite(StubAddFavoriteUseCase::success())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(add_favorite_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/favorites/7")
            .insert_header(bearer_for(42))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["message"], "added to favorites");
    }

    #[actix_web::test]
    async fn test_add_favorite_missing_vehicle() {
        let app_state = TestAppStateBuilder::default()
            .with_add_favorite(StubAddFavoriteUseCase::error(
                AddFavoriteError::VehicleNotFound,
            ))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(add_favorite_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/favorites/999")
            .insert_header(bearer_for(42))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 404);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VEHICLE_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_add_favorite_requires_token() {
        let app_state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(add_favorite_handler),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/favorites/7").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }
}
