use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::vehicle::application::domain::entities::VehicleInspection;
use crate::vehicle::application::domain::upsert::{
    non_negative, parse_optional_date, InspectionUpsert, UpsertValidationError,
};
use crate::vehicle::application::ports::outgoing::VehicleRepositoryError;

// ============================================================
// Input
// ============================================================

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct InspectionUpsertInput {
    #[schema(example = "automart:A1")]
    pub vehicle_source_id: Option<String>,
    #[schema(example = "2025-02-14")]
    pub inspection_date: Option<String>,
    pub vin: Option<String>,
    pub displacement: Option<i32>,
    pub mileage_at_inspection: Option<i32>,
    pub color: Option<String>,
    pub drive_type: Option<String>,
    #[schema(value_type = Object)]
    pub report_data: Option<serde_json::Value>,
    pub report_url: Option<String>,
}

impl TryFrom<InspectionUpsertInput> for InspectionUpsert {
    type Error = UpsertValidationError;

    fn try_from(input: InspectionUpsertInput) -> Result<Self, Self::Error> {
        let vehicle_source_id = input
            .vehicle_source_id
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(UpsertValidationError::MissingField("vehicle_source_id"))?;
        let report_data = input
            .report_data
            .filter(|v| !v.is_null())
            .ok_or(UpsertValidationError::MissingField("report_data"))?;

        Ok(InspectionUpsert {
            vehicle_source_id,
            inspection_date: parse_optional_date(
                "inspection_date",
                input.inspection_date.as_deref(),
            )?,
            vin: input.vin,
            displacement: non_negative("displacement", input.displacement)?,
            mileage_at_inspection: non_negative(
                "mileage_at_inspection",
                input.mileage_at_inspection,
            )?,
            color: input.color,
            drive_type: input.drive_type,
            report_data,
            report_url: input.report_url,
        })
    }
}

// ============================================================
// Errors
// ============================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpsertInspectionError {
    #[error("Vehicle not found")]
    VehicleNotFound,

    #[error(transparent)]
    Validation(#[from] UpsertValidationError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<VehicleRepositoryError> for UpsertInspectionError {
    fn from(err: VehicleRepositoryError) -> Self {
        match err {
            VehicleRepositoryError::VehicleNotFound => UpsertInspectionError::VehicleNotFound,
            other => UpsertInspectionError::RepositoryError(other.to_string()),
        }
    }
}

// ============================================================
// Incoming Port
// ============================================================

#[async_trait]
pub trait UpsertInspectionUseCase: Send + Sync {
    async fn execute(
        &self,
        input: InspectionUpsertInput,
    ) -> Result<VehicleInspection, UpsertInspectionError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn requires_source_id_and_report() {
        assert_eq!(
            InspectionUpsert::try_from(InspectionUpsertInput {
                report_data: Some(json!({})),
                ..Default::default()
            }),
            Err(UpsertValidationError::MissingField("vehicle_source_id"))
        );
        assert_eq!(
            InspectionUpsert::try_from(InspectionUpsertInput {
                vehicle_source_id: Some("automart:A1".to_string()),
                report_data: Some(serde_json::Value::Null),
                ..Default::default()
            }),
            Err(UpsertValidationError::MissingField("report_data"))
        );
    }

    #[test]
    fn accepts_bare_inspection_date() {
        let upsert = InspectionUpsert::try_from(InspectionUpsertInput {
            vehicle_source_id: Some("automart:A1".to_string()),
            inspection_date: Some("2025-02-14".to_string()),
            report_data: Some(json!({"frame": "ok"})),
            ..Default::default()
        })
        .unwrap();

        assert!(upsert.inspection_date.is_some());
        assert_eq!(upsert.report_data["frame"], "ok");
    }

    #[test]
    fn missing_vehicle_maps_to_not_found() {
        assert_eq!(
            UpsertInspectionError::from(VehicleRepositoryError::VehicleNotFound),
            UpsertInspectionError::VehicleNotFound
        );
    }
}
