use async_trait::async_trait;

use crate::vehicle::application::domain::market_mapping::MarketMappings;
use crate::vehicle::application::ports::outgoing::VehicleQueryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetMarketMappingsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<VehicleQueryError> for GetMarketMappingsError {
    fn from(err: VehicleQueryError) -> Self {
        match err {
            VehicleQueryError::DatabaseError(msg) | VehicleQueryError::SerializationError(msg) => {
                GetMarketMappingsError::QueryFailed(msg)
            }
        }
    }
}

#[async_trait]
pub trait GetMarketMappingsUseCase: Send + Sync {
    async fn execute(&self) -> Result<MarketMappings, GetMarketMappingsError>;
}
