use async_trait::async_trait;
use tracing::info;

use crate::vehicle::application::domain::entities::VehicleInspection;
use crate::vehicle::application::domain::upsert::InspectionUpsert;
use crate::vehicle::application::ports::incoming::use_cases::{
    InspectionUpsertInput, UpsertInspectionError, UpsertInspectionUseCase,
};
use crate::vehicle::application::ports::outgoing::VehicleRepository;

pub struct UpsertInspectionService<R>
where
    R: VehicleRepository,
{
    repository: R,
}

impl<R> UpsertInspectionService<R>
where
    R: VehicleRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpsertInspectionUseCase for UpsertInspectionService<R>
where
    R: VehicleRepository + Send + Sync,
{
    async fn execute(
        &self,
        input: InspectionUpsertInput,
    ) -> Result<VehicleInspection, UpsertInspectionError> {
        let upsert = InspectionUpsert::try_from(input)?;
        let inspection = self.repository.upsert_inspection(upsert).await?;

        info!(vehicle_id = inspection.vehicle_id, "Inspection upserted");
        Ok(inspection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::port_mocks::MockVehicleRepositoryPort;
    use crate::tests::support::vehicle_fixtures::sample_inspection;
    use crate::vehicle::application::ports::outgoing::VehicleRepositoryError;
    use serde_json::json;

    fn input() -> InspectionUpsertInput {
        InspectionUpsertInput {
            vehicle_source_id: Some("automart:A1".to_string()),
            report_data: Some(json!({"frame": "ok"})),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn merges_report_for_known_vehicle() {
        let mut repository = MockVehicleRepositoryPort::new();
        repository
            .expect_upsert_inspection()
            .withf(|u| u.vehicle_source_id == "automart:A1")
            .returning(|_| Ok(sample_inspection(1)));

        let report = UpsertInspectionService::new(repository)
            .execute(input())
            .await
            .unwrap();

        assert_eq!(report.vehicle_id, 1);
    }

    #[tokio::test]
    async fn unknown_source_id_is_vehicle_not_found() {
        let mut repository = MockVehicleRepositoryPort::new();
        repository
            .expect_upsert_inspection()
            .returning(|_| Err(VehicleRepositoryError::VehicleNotFound));

        let result = UpsertInspectionService::new(repository).execute(input()).await;

        assert_eq!(result.unwrap_err(), UpsertInspectionError::VehicleNotFound);
    }
}
