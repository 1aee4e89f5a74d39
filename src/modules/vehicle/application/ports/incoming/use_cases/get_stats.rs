use async_trait::async_trait;

use crate::vehicle::application::domain::stats::VehicleStats;
use crate::vehicle::application::ports::outgoing::VehicleQueryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetStatsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<VehicleQueryError> for GetStatsError {
    fn from(err: VehicleQueryError) -> Self {
        match err {
            VehicleQueryError::DatabaseError(msg) | VehicleQueryError::SerializationError(msg) => {
                GetStatsError::QueryFailed(msg)
            }
        }
    }
}

#[async_trait]
pub trait GetStatsUseCase: Send + Sync {
    async fn execute(&self) -> Result<VehicleStats, GetStatsError>;
}
