use async_trait::async_trait;

use crate::vehicle::application::domain::entities::AuctionHistoryEntry;
use crate::vehicle::application::ports::outgoing::VehicleQueryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetVehicleHistoryError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<VehicleQueryError> for GetVehicleHistoryError {
    fn from(err: VehicleQueryError) -> Self {
        match err {
            VehicleQueryError::DatabaseError(msg) | VehicleQueryError::SerializationError(msg) => {
                GetVehicleHistoryError::QueryFailed(msg)
            }
        }
    }
}

/// An unknown vehicle simply has no history.
#[async_trait]
pub trait GetVehicleHistoryUseCase: Send + Sync {
    async fn execute(&self, vehicle_id: i64)
        -> Result<Vec<AuctionHistoryEntry>, GetVehicleHistoryError>;
}
