pub mod get_market_mappings_service;
pub mod get_sources_service;
pub mod get_stats_service;
pub mod get_vehicle_history_service;
pub mod get_vehicle_inspection_service;
pub mod get_vehicle_service;
pub mod list_vehicles_service;
pub mod lookup_car_number_service;
pub mod upsert_inspection_service;
pub mod upsert_vehicle_service;

pub use get_market_mappings_service::GetMarketMappingsService;
pub use get_sources_service::GetSourcesService;
pub use get_stats_service::GetStatsService;
pub use get_vehicle_history_service::GetVehicleHistoryService;
pub use get_vehicle_inspection_service::GetVehicleInspectionService;
pub use get_vehicle_service::GetVehicleService;
pub use list_vehicles_service::ListVehiclesService;
pub use lookup_car_number_service::LookupCarNumberService;
pub use upsert_inspection_service::UpsertInspectionService;
pub use upsert_vehicle_service::UpsertVehicleService;
