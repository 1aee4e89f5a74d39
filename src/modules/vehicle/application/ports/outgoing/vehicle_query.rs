use async_trait::async_trait;

use crate::shared::pagination::{PageRequest, PageResult};
use crate::vehicle::application::domain::entities::{
    AuctionHistoryEntry, Vehicle, VehicleExternalInfo, VehicleInspection,
};
use crate::vehicle::application::domain::listing::{VehicleListFilter, VehicleSort};
use crate::vehicle::application::domain::market_mapping::MarketMappings;
use crate::vehicle::application::domain::stats::{SourceCount, VehicleStats};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VehicleQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Read side of the vehicle catalogue.
#[async_trait]
pub trait VehicleQuery: Send + Sync {
    /// Filtered, sorted page plus the total match count.
    async fn list(
        &self,
        filter: VehicleListFilter,
        sort: VehicleSort,
        page: PageRequest,
    ) -> Result<PageResult<Vehicle>, VehicleQueryError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Vehicle>, VehicleQueryError>;

    /// Newest entry first.
    async fn history(&self, vehicle_id: i64) -> Result<Vec<AuctionHistoryEntry>, VehicleQueryError>;

    async fn inspection(
        &self,
        vehicle_id: i64,
    ) -> Result<Option<VehicleInspection>, VehicleQueryError>;

    /// Exact plate matches, newest first.
    async fn find_by_car_number(&self, car_number: &str)
        -> Result<Vec<Vehicle>, VehicleQueryError>;

    /// Most recently fetched external record for the plate.
    async fn external_info(
        &self,
        car_number: &str,
    ) -> Result<Option<VehicleExternalInfo>, VehicleQueryError>;

    async fn stats(&self) -> Result<VehicleStats, VehicleQueryError>;

    /// Row count per source, largest first.
    async fn source_counts(&self) -> Result<Vec<SourceCount>, VehicleQueryError>;

    async fn market_mappings(&self) -> Result<MarketMappings, VehicleQueryError>;
}
