pub mod vehicle_query;
pub mod vehicle_repository;

pub use vehicle_query::{VehicleQuery, VehicleQueryError};
pub use vehicle_repository::{VehicleRepository, VehicleRepositoryError};
