use async_trait::async_trait;

use crate::vehicle::application::domain::entities::AuctionHistoryEntry;
use crate::vehicle::application::ports::incoming::use_cases::{
    GetVehicleHistoryError, GetVehicleHistoryUseCase,
};
use crate::vehicle::application::ports::outgoing::VehicleQuery;

pub struct GetVehicleHistoryService<Q>
where
    Q: VehicleQuery,
{
    query: Q,
}

impl<Q> GetVehicleHistoryService<Q>
where
    Q: VehicleQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetVehicleHistoryUseCase for GetVehicleHistoryService<Q>
where
    Q: VehicleQuery + Send + Sync,
{
    async fn execute(
        &self,
        vehicle_id: i64,
    ) -> Result<Vec<AuctionHistoryEntry>, GetVehicleHistoryError> {
        Ok(self.query.history(vehicle_id).await?)
    }
}
