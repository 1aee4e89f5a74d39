pub mod json_config;
pub mod query_config;
pub mod response;

pub use json_config::custom_json_config;
pub use query_config::custom_query_config;
pub use response::{ApiError, ApiResponse, MessageResponse};
