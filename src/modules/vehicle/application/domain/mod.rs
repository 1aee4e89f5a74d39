pub mod entities;
pub mod listing;
pub mod market_mapping;
pub mod stats;
pub mod upsert;
