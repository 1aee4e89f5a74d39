use async_trait::async_trait;

use crate::shared::pagination::{PageRequest, PageResult};
use crate::vehicle::application::domain::entities::Vehicle;
use crate::vehicle::application::domain::listing::{VehicleListFilter, VehicleSort};
use crate::vehicle::application::ports::outgoing::VehicleQueryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListVehiclesError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<VehicleQueryError> for ListVehiclesError {
    fn from(err: VehicleQueryError) -> Self {
        match err {
            VehicleQueryError::DatabaseError(msg) | VehicleQueryError::SerializationError(msg) => {
                ListVehiclesError::QueryFailed(msg)
            }
        }
    }
}

#[async_trait]
pub trait ListVehiclesUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: VehicleListFilter,
        sort: VehicleSort,
        page: PageRequest,
    ) -> Result<PageResult<Vehicle>, ListVehiclesError>;
}
