use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::vehicle::adapter::incoming::web::dto::parse_vehicle_id;
use crate::vehicle::application::domain::entities::AuctionHistoryEntry;
use crate::vehicle::application::ports::incoming::use_cases::GetVehicleHistoryError;
use crate::AppState;

/// Auction history of a vehicle, newest first
#[utoipa::path(
    get,
    path = "/api/vehicles/{id}/history",
    tag = "vehicles",
    params(("id" = i64, Path, description = "Vehicle id")),
    responses(
        (status = 200, description = "History entries (empty for unknown vehicles)", body = inline(SuccessResponse<Vec<AuctionHistoryEntry>>)),
        (status = 400, description = "Id is not numeric", body = ErrorResponse),
    )
)]
#[get("/api/vehicles/{id}/history")]
pub async fn get_vehicle_history_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(id) = parse_vehicle_id(&path) else {
        return ApiResponse::bad_request("INVALID_ID", "Vehicle id must be a number");
    };

    match data.vehicle.get_history.execute(id).await {
        Ok(entries) => ApiResponse::success(entries),
        Err(GetVehicleHistoryError::QueryFailed(ref e)) => {
            error!(vehicle_id = id, error = %e, "Failed to load auction history");
            ApiResponse::internal_error_with(data.expose_error_details, e)
        }
    }
}
