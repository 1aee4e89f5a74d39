use async_trait::async_trait;

use crate::vehicle::application::domain::entities::CarNumberLookup;
use crate::vehicle::application::ports::outgoing::VehicleQueryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupCarNumberError {
    #[error("car number is required")]
    EmptyCarNumber,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<VehicleQueryError> for LookupCarNumberError {
    fn from(err: VehicleQueryError) -> Self {
        match err {
            VehicleQueryError::DatabaseError(msg) | VehicleQueryError::SerializationError(msg) => {
                LookupCarNumberError::QueryFailed(msg)
            }
        }
    }
}

#[async_trait]
pub trait LookupCarNumberUseCase: Send + Sync {
    async fn execute(&self, car_number: &str) -> Result<CarNumberLookup, LookupCarNumberError>;
}
