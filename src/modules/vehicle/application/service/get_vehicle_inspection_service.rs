use async_trait::async_trait;

use crate::vehicle::application::domain::entities::VehicleInspection;
use crate::vehicle::application::ports::incoming::use_cases::{
    GetVehicleInspectionError, GetVehicleInspectionUseCase,
};
use crate::vehicle::application::ports::outgoing::VehicleQuery;

pub struct GetVehicleInspectionService<Q>
where
    Q: VehicleQuery,
{
    query: Q,
}

impl<Q> GetVehicleInspectionService<Q>
where
    Q: VehicleQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetVehicleInspectionUseCase for GetVehicleInspectionService<Q>
where
    Q: VehicleQuery + Send + Sync,
{
    async fn execute(
        &self,
        vehicle_id: i64,
    ) -> Result<VehicleInspection, GetVehicleInspectionError> {
        self.query
            .inspection(vehicle_id)
            .await?
            .ok_or(GetVehicleInspectionError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::port_mocks::MockVehicleQueryPort;
    use crate::tests::support::vehicle_fixtures::sample_inspection;

    #[tokio::test]
    async fn returns_report() {
        let mut query = MockVehicleQueryPort::new();
        query
            .expect_inspection()
            .returning(|id| Ok(Some(sample_inspection(id))));

        let report = GetVehicleInspectionService::new(query).execute(8).await.unwrap();

        assert_eq!(report.vehicle_id, 8);
    }

    #[tokio::test]
    async fn no_report_is_not_found() {
        let mut query = MockVehicleQueryPort::new();
        query.expect_inspection().returning(|_| Ok(None));

        let result = GetVehicleInspectionService::new(query).execute(8).await;

        assert_eq!(result.unwrap_err(), GetVehicleInspectionError::NotFound);
    }
}
