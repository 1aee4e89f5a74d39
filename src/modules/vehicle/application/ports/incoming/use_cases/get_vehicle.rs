use async_trait::async_trait;

use crate::vehicle::application::domain::entities::Vehicle;
use crate::vehicle::application::ports::outgoing::VehicleQueryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetVehicleError {
    #[error("Vehicle not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<VehicleQueryError> for GetVehicleError {
    fn from(err: VehicleQueryError) -> Self {
        match err {
            VehicleQueryError::DatabaseError(msg) | VehicleQueryError::SerializationError(msg) => {
                GetVehicleError::QueryFailed(msg)
            }
        }
    }
}

#[async_trait]
pub trait GetVehicleUseCase: Send + Sync {
    async fn execute(&self, id: i64) -> Result<Vehicle, GetVehicleError>;
}
