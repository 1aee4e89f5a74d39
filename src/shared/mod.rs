pub mod api;
pub mod config;
pub mod cors;
pub mod pagination;
