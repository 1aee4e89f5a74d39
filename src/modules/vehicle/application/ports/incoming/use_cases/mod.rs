mod get_market_mappings;
mod get_sources;
mod get_stats;
mod get_vehicle;
mod get_vehicle_history;
mod get_vehicle_inspection;
mod list_vehicles;
mod lookup_car_number;
mod upsert_inspection;
mod upsert_vehicle;

pub use get_market_mappings::{GetMarketMappingsError, GetMarketMappingsUseCase};
pub use get_sources::{GetSourcesError, GetSourcesUseCase};
pub use get_stats::{GetStatsError, GetStatsUseCase};
pub use get_vehicle::{GetVehicleError, GetVehicleUseCase};
pub use get_vehicle_history::{GetVehicleHistoryError, GetVehicleHistoryUseCase};
pub use get_vehicle_inspection::{GetVehicleInspectionError, GetVehicleInspectionUseCase};
pub use list_vehicles::{ListVehiclesError, ListVehiclesUseCase};
pub use lookup_car_number::{LookupCarNumberError, LookupCarNumberUseCase};
pub use upsert_inspection::{InspectionUpsertInput, UpsertInspectionError, UpsertInspectionUseCase};
pub use upsert_vehicle::{UpsertVehicleError, UpsertVehicleUseCase, VehicleUpsertInput};
