use async_trait::async_trait;

use crate::vehicle::application::domain::entities::{Vehicle, VehicleInspection};
use crate::vehicle::application::domain::upsert::{InspectionUpsert, VehicleUpsert};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VehicleRepositoryError {
    #[error("Vehicle not found")]
    VehicleNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Write side: idempotent ingestion keyed by `(source, source_id)`.
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Inserts or merges; absent fields keep their stored values.
    async fn upsert(&self, vehicle: VehicleUpsert) -> Result<Vehicle, VehicleRepositoryError>;

    /// Fails with `VehicleNotFound` when no vehicle has the given `source_id`.
    async fn upsert_inspection(
        &self,
        inspection: InspectionUpsert,
    ) -> Result<VehicleInspection, VehicleRepositoryError>;
}
