use async_trait::async_trait;

use crate::vehicle::application::domain::entities::Vehicle;
use crate::vehicle::application::ports::incoming::use_cases::{GetVehicleError, GetVehicleUseCase};
use crate::vehicle::application::ports::outgoing::VehicleQuery;

pub struct GetVehicleService<Q>
where
    Q: VehicleQuery,
{
    query: Q,
}

impl<Q> GetVehicleService<Q>
where
    Q: VehicleQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetVehicleUseCase for GetVehicleService<Q>
where
    Q: VehicleQuery + Send + Sync,
{
    async fn execute(&self, id: i64) -> Result<Vehicle, GetVehicleError> {
        self.query
            .find_by_id(id)
            .await?
            .ok_or(GetVehicleError::NotFound)
    }
}
