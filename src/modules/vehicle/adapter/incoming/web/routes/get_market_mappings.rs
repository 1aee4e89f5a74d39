use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::vehicle::application::domain::market_mapping::MarketMappings;
use crate::vehicle::application::ports::incoming::use_cases::GetMarketMappingsError;
use crate::AppState;

/// Manufacturer, fuel and model name translations for external markets
#[utoipa::path(
    get,
    path = "/api/market-mappings",
    tag = "vehicles",
    responses(
        (status = 200, description = "All mapping tables", body = inline(SuccessResponse<MarketMappings>)),
        (status = 500, description = "Query failed", body = ErrorResponse),
    )
)]
#[get("/api/market-mappings")]
pub async fn get_market_mappings_handler(data: web::Data<AppState>) -> impl Responder {
    match data.vehicle.market_mappings.execute().await {
        Ok(mappings) => ApiResponse::success(mappings),
        Err(GetMarketMappingsError::QueryFailed(ref e)) => {
            error!(error = %e, "Failed to load market mappings");
            ApiResponse::internal_error_with(data.expose_error_details, e)
        }
    }
}
