use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::vehicle::application::domain::stats::SourceInfo;
use crate::vehicle::application::ports::incoming::use_cases::GetSourcesError;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/sources",
    tag = "vehicles",
    responses(
        (status = 200, description = "Ingestion sources with listing counts", body = inline(SuccessResponse<Vec<SourceInfo>>)),
        (status = 500, description = "Query failed", body = ErrorResponse),
    )
)]
#[get("/api/sources")]
pub async fn get_sources_handler(data: web::Data<AppState>) -> impl Responder {
    match data.vehicle.sources.execute().await {
        Ok(sources) => ApiResponse::success(sources),
        Err(GetSourcesError::QueryFailed(ref e)) => {
            error!(error = %e, "Failed to list sources");
            ApiResponse::internal_error_with(data.expose_error_details, e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubGetSourcesUseCase;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_sources_success() {
        let app_state = TestAppStateBuilder::default()
            .with_get_sources(StubGetSourcesUseCase::success())
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(get_sources_handler)).await;

        let req = test::TestRequest::get().uri("/api/sources").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][0]["source"], "automart");
        assert_eq!(body["data"][0]["name"], "Automart Public Sale");
    }
}
