use async_trait::async_trait;
use tracing::info;

use crate::vehicle::application::domain::entities::Vehicle;
use crate::vehicle::application::domain::upsert::VehicleUpsert;
use crate::vehicle::application::ports::incoming::use_cases::{
    UpsertVehicleError, UpsertVehicleUseCase, VehicleUpsertInput,
};
use crate::vehicle::application::ports::outgoing::VehicleRepository;

pub struct UpsertVehicleService<R>
where
    R: VehicleRepository,
{
    repository: R,
}

impl<R> UpsertVehicleService<R>
where
    R: VehicleRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpsertVehicleUseCase for UpsertVehicleService<R>
where
    R: VehicleRepository + Send + Sync,
{
    async fn execute(&self, input: VehicleUpsertInput) -> Result<Vehicle, UpsertVehicleError> {
        let upsert = VehicleUpsert::try_from(input)?;
        let vehicle = self.repository.upsert(upsert).await?;

        info!(
            vehicle_id = vehicle.id,
            source = %vehicle.source,
            source_id = %vehicle.source_id,
            "Vehicle upserted"
        );
        Ok(vehicle)
    }
}
