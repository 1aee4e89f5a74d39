use actix_web::{post, web, Responder};
use tracing::{error, warn};

use super::upsert_vehicle::validation_failed;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::vehicle::application::domain::entities::VehicleInspection;
use crate::vehicle::application::ports::incoming::use_cases::{
    InspectionUpsertInput, UpsertInspectionError,
};
use crate::AppState;

/// Attach or replace the inspection report of a vehicle identified by `source_id`.
#[utoipa::path(
    post,
    path = "/api/vehicles/inspection/upsert",
    tag = "ingestion",
    request_body = InspectionUpsertInput,
    responses(
        (status = 200, description = "The stored inspection", body = inline(SuccessResponse<VehicleInspection>)),
        (status = 400, description = "Missing source id or report data", body = ErrorResponse),
        (status = 404, description = "No vehicle has this source id", body = ErrorResponse),
    )
)]
#[post("/api/vehicles/inspection/upsert")]
pub async fn upsert_inspection_handler(
    payload: web::Json<InspectionUpsertInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .vehicle
        .upsert_inspection
        .execute(payload.into_inner())
        .await
    {
        Ok(report) => ApiResponse::success(report),
        Err(UpsertInspectionError::VehicleNotFound) => {
            ApiResponse::not_found("VEHICLE_NOT_FOUND", "No vehicle matches vehicle_source_id")
        }
        Err(UpsertInspectionError::Validation(ref e)) => {
            warn!(error = %e, "Rejected inspection upsert");
            validation_failed(e)
        }
        Err(UpsertInspectionError::RepositoryError(ref e)) => {
            error!(error = %e, "Inspection upsert failed");
            ApiResponse::internal_error_with(data.expose_error_details, e)
        }
    }
}
