use actix_web::{post, web, HttpResponse, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::vehicle::application::domain::entities::Vehicle;
use crate::vehicle::application::domain::upsert::UpsertValidationError;
use crate::vehicle::application::ports::incoming::use_cases::{
    UpsertVehicleError, VehicleUpsertInput,
};
use crate::AppState;

pub(crate) fn validation_failed(e: &UpsertValidationError) -> HttpResponse {
    let code = match e {
        UpsertValidationError::MissingField(_) => "VALIDATION_ERROR",
        UpsertValidationError::InvalidDate(_) => "INVALID_DATE",
        UpsertValidationError::NegativeValue(_) => "INVALID_FIELD",
    };
    ApiResponse::bad_request(code, &e.to_string())
}

/// Insert or merge a crawled vehicle. Absent fields keep their stored values.
#[utoipa::path(
    post,
    path = "/api/vehicles/upsert",
    tag = "ingestion",
    request_body = VehicleUpsertInput,
    responses(
        (status = 200, description = "The stored vehicle after the merge", body = inline(SuccessResponse<Vehicle>)),
        (status = 400, description = "Missing mgmt_number, bad date or negative number", body = ErrorResponse),
        (status = 500, description = "Write failed", body = ErrorResponse),
    )
)]
#[post("/api/vehicles/upsert")]
pub async fn upsert_vehicle_handler(
    payload: web::Json<VehicleUpsertInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.vehicle.upsert.execute(payload.into_inner()).await {
        Ok(vehicle) => ApiResponse::success(vehicle),
        Err(UpsertVehicleError::Validation(ref e)) => {
            warn!(error = %e, "Rejected vehicle upsert");
            validation_failed(e)
        }
        Err(UpsertVehicleError::RepositoryError(ref e)) => {
            error!(error = %e, "Vehicle upsert failed");
            ApiResponse::internal_error_with(data.expose_error_details, e)
        }
    }
}
