pub mod auction_history;
pub mod market_fuel_mappings;
pub mod market_manufacturer_mappings;
pub mod market_model_mappings;
pub mod vehicle_external_info;
pub mod vehicle_inspections;
pub mod vehicles;
