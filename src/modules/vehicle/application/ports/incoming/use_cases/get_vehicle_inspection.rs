use async_trait::async_trait;

use crate::vehicle::application::domain::entities::VehicleInspection;
use crate::vehicle::application::ports::outgoing::VehicleQueryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetVehicleInspectionError {
    #[error("Inspection not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<VehicleQueryError> for GetVehicleInspectionError {
    fn from(err: VehicleQueryError) -> Self {
        match err {
            VehicleQueryError::DatabaseError(msg) | VehicleQueryError::SerializationError(msg) => {
                GetVehicleInspectionError::QueryFailed(msg)
            }
        }
    }
}

#[async_trait]
pub trait GetVehicleInspectionUseCase: Send + Sync {
    async fn execute(&self, vehicle_id: i64)
        -> Result<VehicleInspection, GetVehicleInspectionError>;
}
