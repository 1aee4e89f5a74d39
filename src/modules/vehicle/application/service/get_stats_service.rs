use async_trait::async_trait;

use crate::vehicle::application::domain::stats::VehicleStats;
use crate::vehicle::application::ports::incoming::use_cases::{GetStatsError, GetStatsUseCase};
use crate::vehicle::application::ports::outgoing::VehicleQuery;

pub struct GetStatsService<Q>
where
    Q: VehicleQuery,
{
    query: Q,
}

impl<Q> GetStatsService<Q>
where
    Q: VehicleQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetStatsUseCase for GetStatsService<Q>
where
    Q: VehicleQuery + Send + Sync,
{
    async fn execute(&self) -> Result<VehicleStats, GetStatsError> {
        Ok(self.query.stats().await?)
    }
}
