use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::vehicle::application::domain::entities::Vehicle;
use crate::vehicle::application::domain::upsert::{
    non_negative, parse_optional_date, UpsertValidationError, VehicleUpsert, DEFAULT_SOURCE,
};
use crate::vehicle::application::ports::outgoing::VehicleRepositoryError;

// ============================================================
// Input
// ============================================================

/// Raw ingestion payload. Dates stay strings until validated.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct VehicleUpsertInput {
    #[schema(example = "2025-001234")]
    pub mgmt_number: Option<String>,
    pub car_number: Option<String>,
    pub manufacturer: Option<String>,
    pub model_name: Option<String>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub year: Option<i32>,
    pub mileage: Option<i32>,
    pub price: Option<i64>,
    pub min_bid_price: Option<i64>,
    pub location: Option<String>,
    pub organization: Option<String>,
    #[schema(example = "2025-03-01 14:00:00")]
    pub due_date: Option<String>,
    pub auction_count: Option<i32>,
    pub status: Option<String>,
    pub image_urls: Option<Vec<String>>,
    pub detail_url: Option<String>,
    #[schema(example = "automart")]
    pub source: Option<String>,
    pub source_id: Option<String>,
    pub final_price: Option<i64>,
    pub result_status: Option<String>,
    pub result_date: Option<String>,
    pub case_number: Option<String>,
    pub court_name: Option<String>,
    pub property_type: Option<String>,
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl TryFrom<VehicleUpsertInput> for VehicleUpsert {
    type Error = UpsertValidationError;

    fn try_from(input: VehicleUpsertInput) -> Result<Self, Self::Error> {
        let mgmt_number =
            present(input.mgmt_number).ok_or(UpsertValidationError::MissingField("mgmt_number"))?;
        let source = present(input.source).unwrap_or_else(|| DEFAULT_SOURCE.to_string());
        let source_id =
            present(input.source_id).unwrap_or_else(|| format!("{}:{}", source, mgmt_number));

        Ok(VehicleUpsert {
            car_number: input.car_number,
            manufacturer: input.manufacturer,
            model_name: input.model_name,
            fuel_type: input.fuel_type,
            transmission: input.transmission,
            year: non_negative("year", input.year)?,
            mileage: non_negative("mileage", input.mileage)?,
            price: non_negative("price", input.price)?,
            min_bid_price: non_negative("min_bid_price", input.min_bid_price)?,
            location: input.location,
            organization: input.organization,
            due_date: parse_optional_date("due_date", input.due_date.as_deref())?,
            auction_count: non_negative("auction_count", input.auction_count)?,
            status: input.status,
            image_urls: input.image_urls,
            detail_url: input.detail_url,
            final_price: non_negative("final_price", input.final_price)?,
            result_status: input.result_status,
            result_date: parse_optional_date("result_date", input.result_date.as_deref())?,
            case_number: input.case_number,
            court_name: input.court_name,
            property_type: input.property_type,
            mgmt_number,
            source,
            source_id,
        })
    }
}

// ============================================================
// Errors
// ============================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpsertVehicleError {
    #[error(transparent)]
    Validation(#[from] UpsertValidationError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<VehicleRepositoryError> for UpsertVehicleError {
    fn from(err: VehicleRepositoryError) -> Self {
        UpsertVehicleError::RepositoryError(err.to_string())
    }
}

// ============================================================
// Incoming Port
// ============================================================

#[async_trait]
pub trait UpsertVehicleUseCase: Send + Sync {
    async fn execute(&self, input: VehicleUpsertInput) -> Result<Vehicle, UpsertVehicleError>;
}
