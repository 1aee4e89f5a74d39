use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::vehicle::application::domain::entities::CarNumberLookup;
use crate::vehicle::application::ports::incoming::use_cases::LookupCarNumberError;
use crate::AppState;

/// Every listing for a plate number plus cached registry data
#[utoipa::path(
    get,
    path = "/api/vehicles/lookup/{car_number}",
    tag = "vehicles",
    params(("car_number" = String, Path, description = "Plate number, e.g. 12가3456")),
    responses(
        (status = 200, description = "Matches, external info and registry link", body = inline(SuccessResponse<CarNumberLookup>)),
        (status = 400, description = "Blank plate number", body = ErrorResponse),
    )
)]
#[get("/api/vehicles/lookup/{car_number}")]
pub async fn lookup_car_number_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.vehicle.lookup.execute(&path).await {
        Ok(lookup) => ApiResponse::success(lookup),
        Err(LookupCarNumberError::EmptyCarNumber) => {
            ApiResponse::bad_request("VALIDATION_ERROR", "car_number is required")
        }
        Err(LookupCarNumberError::QueryFailed(ref e)) => {
            error!(error = %e, "Car number lookup failed");
            ApiResponse::internal_error_with(data.expose_error_details, e)
        }
    }
}
