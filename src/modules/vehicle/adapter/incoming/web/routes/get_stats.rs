use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::vehicle::application::domain::stats::VehicleStats;
use crate::vehicle::application::ports::incoming::use_cases::GetStatsError;
use crate::AppState;

/// Market-wide price and completion statistics
#[utoipa::path(
    get,
    path = "/api/stats",
    tag = "vehicles",
    responses(
        (status = 200, description = "Aggregated statistics", body = inline(SuccessResponse<VehicleStats>)),
        (status = 500, description = "Query failed", body = ErrorResponse),
    )
)]
#[get("/api/stats")]
pub async fn get_stats_handler(data: web::Data<AppState>) -> impl Responder {
    match data.vehicle.stats.execute().await {
        Ok(stats) => ApiResponse::success(stats),
        Err(GetStatsError::QueryFailed(ref e)) => {
            error!(error = %e, "Failed to compute stats");
            ApiResponse::internal_error_with(data.expose_error_details, e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubGetStatsUseCase;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_stats_success() {
        let app_state = TestAppStateBuilder::default()
            .with_get_stats(StubGetStatsUseCase::success())
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(get_stats_handler)).await;

        let req = test::TestRequest::get().uri("/api/stats").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["total_count"], 4);
        assert_eq!(body["data"]["sale_rate"], 50.0);
        assert_eq!(body["data"]["price_range"]["max"], 12_000_000);
    }

    #[actix_web::test]
    async fn test_stats_failure() {
        let app_state = TestAppStateBuilder::default()
            .with_get_stats(StubGetStatsUseCase::error(GetStatsError::QueryFailed(
                "timeout".to_string(),
            )))
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(get_stats_handler)).await;

        let req = test::TestRequest::get().uri("/api/stats").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 500);
    }
}
