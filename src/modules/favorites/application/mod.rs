pub mod favorite_use_cases;
pub mod ports;
pub mod service;

pub use favorite_use_cases::FavoriteUseCases;
