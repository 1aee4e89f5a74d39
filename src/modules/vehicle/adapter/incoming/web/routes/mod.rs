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

pub use get_market_mappings::*;
pub use get_sources::*;
pub use get_stats::*;
pub use get_vehicle::*;
pub use get_vehicle_history::*;
pub use get_vehicle_inspection::*;
pub use list_vehicles::*;
pub use lookup_car_number::*;
pub use upsert_inspection::*;
pub use upsert_vehicle::*;
