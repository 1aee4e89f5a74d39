use actix_web::{get, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::vehicle::adapter::incoming::web::dto::parse_vehicle_id;
use crate::vehicle::application::domain::entities::Vehicle;
use crate::vehicle::application::ports::incoming::use_cases::GetVehicleError;
use crate::AppState;

/// Single vehicle by id
#[utoipa::path(
    get,
    path = "/api/vehicles/{id}",
    tag = "vehicles",
    params(("id" = i64, Path, description = "Vehicle id")),
    responses(
        (status = 200, description = "The vehicle", body = inline(SuccessResponse<Vehicle>)),
        (status = 400, description = "Id is not numeric", body = ErrorResponse),
        (status = 404, description = "No such vehicle", body = ErrorResponse),
    )
)]
#[get("/api/vehicles/{id}")]
pub async fn get_vehicle_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(id) = parse_vehicle_id(&path) else {
        return ApiResponse::bad_request("INVALID_ID", "Vehicle id must be a number");
    };

    match data.vehicle.get_single.execute(id).await {
        Ok(vehicle) => ApiResponse::success(vehicle),
        Err(GetVehicleError::NotFound) => {
            warn!(vehicle_id = id, "Vehicle not found");
            ApiResponse::not_found("VEHICLE_NOT_FOUND", "Vehicle not found")
        }
        Err(GetVehicleError::QueryFailed(ref e)) => {
            error!(vehicle_id = id, error = %e, "Failed to load vehicle");
            ApiResponse::internal_error_with(data.expose_error_details, e)
        }
    }
}
