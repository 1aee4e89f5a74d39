use actix_web::{get, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, PaginatedResponse};
use crate::shared::api::ApiResponse;
use crate::vehicle::adapter::incoming::web::dto::VehicleListQuery;
use crate::vehicle::application::domain::entities::Vehicle;
use crate::vehicle::application::ports::incoming::use_cases::ListVehiclesError;
use crate::AppState;

/// Filtered, sorted, paginated vehicle listing
#[utoipa::path(
    get,
    path = "/api/vehicles",
    tag = "vehicles",
    params(VehicleListQuery),
    responses(
        (status = 200, description = "One page of vehicles", body = inline(PaginatedResponse<Vehicle>)),
        (status = 400, description = "A numeric filter did not parse", body = ErrorResponse),
        (status = 500, description = "Query failed", body = ErrorResponse),
    )
)]
#[get("/api/vehicles")]
pub async fn list_vehicles_handler(
    query: web::Query<VehicleListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (filter, sort, page) = match query.into_inner().into_parts() {
        Ok(parts) => parts,
        Err(e) => {
            warn!(field = e.field, value = %e.value, "Rejected vehicle listing query");
            return ApiResponse::bad_request("INVALID_QUERY", &e.to_string());
        }
    };

    match data.vehicle.list.execute(filter, sort, page).await {
        Ok(result) => {
            let pagination = result.pagination();
            ApiResponse::paginated(result.items, pagination)
        }
        Err(ListVehiclesError::QueryFailed(ref e)) => {
            error!(error = %e, "Failed to list vehicles");
            ApiResponse::internal_error_with(data.expose_error_details, e)
        }
    }
}
