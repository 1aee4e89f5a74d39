pub mod auth;
pub mod email;
pub mod favorites;
pub mod vehicle;
