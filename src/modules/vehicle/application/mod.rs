pub mod domain;
pub mod ports;
pub mod service;
pub mod vehicle_use_cases;

pub use vehicle_use_cases::VehicleUseCases;
