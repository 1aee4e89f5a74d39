// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::pagination::Pagination;

/// Standard success response wrapper
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always true for successful responses
    #[schema(example = true)]
    pub success: bool,
    /// Response data
    pub data: T,
}

/// Success wrapper for list endpoints
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct PaginatedResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: Vec<T>,
    pub pagination: Pagination,
}

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    /// Error details
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    #[schema(example = "VEHICLE_NOT_FOUND")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Vehicle not found")]
    pub message: String,
}
