use actix_web::{get, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::vehicle::adapter::incoming::web::dto::parse_vehicle_id;
use crate::vehicle::application::domain::entities::VehicleInspection;
use crate::vehicle::application::ports::incoming::use_cases::GetVehicleInspectionError;
use crate::AppState;

/// Inspection report of a vehicle
#[utoipa::path(
    get,
    path = "/api/vehicles/{id}/inspection",
    tag = "vehicles",
    params(("id" = i64, Path, description = "Vehicle id")),
    responses(
        (status = 200, description = "The inspection report", body = inline(SuccessResponse<VehicleInspection>)),
        (status = 400, description = "Id is not numeric", body = ErrorResponse),
        (status = 404, description = "No report for this vehicle", body = ErrorResponse),
    )
)]
#[get("/api/vehicles/{id}/inspection")]
pub async fn get_vehicle_inspection_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(id) = parse_vehicle_id(&path) else {
        return ApiResponse::bad_request("INVALID_ID", "Vehicle id must be a number");
    };

    match data.vehicle.get_inspection.execute(id).await {
        Ok(report) => ApiResponse::success(report),
        Err(GetVehicleInspectionError::NotFound) => {
            warn!(vehicle_id = id, "No inspection report");
            ApiResponse::not_found("INSPECTION_NOT_FOUND", "Inspection report not found")
        }
        Err(GetVehicleInspectionError::QueryFailed(ref e)) => {
            error!(vehicle_id = id, error = %e, "Failed to load inspection");
            ApiResponse::internal_error_with(data.expose_error_details, e)
        }
    }
}
