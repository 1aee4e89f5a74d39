use async_trait::async_trait;

use crate::vehicle::application::domain::stats::SourceInfo;
use crate::vehicle::application::ports::outgoing::VehicleQueryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetSourcesError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<VehicleQueryError> for GetSourcesError {
    fn from(err: VehicleQueryError) -> Self {
        match err {
            VehicleQueryError::DatabaseError(msg) | VehicleQueryError::SerializationError(msg) => {
                GetSourcesError::QueryFailed(msg)
            }
        }
    }
}

#[async_trait]
pub trait GetSourcesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<SourceInfo>, GetSourcesError>;
}
