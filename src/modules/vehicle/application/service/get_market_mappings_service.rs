use async_trait::async_trait;

use crate::vehicle::application::domain::market_mapping::MarketMappings;
use crate::vehicle::application::ports::incoming::use_cases::{
    GetMarketMappingsError, GetMarketMappingsUseCase,
};
use crate::vehicle::application::ports::outgoing::VehicleQuery;

pub struct GetMarketMappingsService<Q>
where
    Q: VehicleQuery,
{
    query: Q,
}

impl<Q> GetMarketMappingsService<Q>
where
    Q: VehicleQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetMarketMappingsUseCase for GetMarketMappingsService<Q>
where
    Q: VehicleQuery + Send + Sync,
{
    async fn execute(&self) -> Result<MarketMappings, GetMarketMappingsError> {
        Ok(self.query.market_mappings().await?)
    }
}
