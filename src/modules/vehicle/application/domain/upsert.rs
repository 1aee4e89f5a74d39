use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

pub const DEFAULT_SOURCE: &str = "automart";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpsertValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{0} must not be negative")]
    NegativeValue(&'static str),

    #[error("{0} has an unrecognised date format")]
    InvalidDate(&'static str),
}

/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS` (UTC) or `YYYY-MM-DD` (midnight UTC).
pub fn parse_flexible_datetime(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Blank strings are treated as absent.
pub(crate) fn parse_optional_date(
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<DateTime<Utc>>, UpsertValidationError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(value) => parse_flexible_datetime(value)
            .map(Some)
            .ok_or(UpsertValidationError::InvalidDate(field)),
    }
}

pub(crate) fn non_negative<T>(field: &'static str, value: Option<T>) -> Result<Option<T>, UpsertValidationError>
where
    T: PartialOrd + Default + Copy,
{
    match value {
        Some(v) if v < T::default() => Err(UpsertValidationError::NegativeValue(field)),
        other => Ok(other),
    }
}

/// A validated vehicle merge. `None` fields leave the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleUpsert {
    pub mgmt_number: String,
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
    pub due_date: Option<DateTime<Utc>>,
    pub auction_count: Option<i32>,
    pub status: Option<String>,
    pub image_urls: Option<Vec<String>>,
    pub detail_url: Option<String>,
    pub source: String,
    pub source_id: String,
    pub final_price: Option<i64>,
    pub result_status: Option<String>,
    pub result_date: Option<DateTime<Utc>>,
    pub case_number: Option<String>,
    pub court_name: Option<String>,
    pub property_type: Option<String>,
}

/// A validated inspection merge keyed by the vehicle's `source_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectionUpsert {
    pub vehicle_source_id: String,
    pub inspection_date: Option<DateTime<Utc>>,
    pub vin: Option<String>,
    pub displacement: Option<i32>,
    pub mileage_at_inspection: Option<i32>,
    pub color: Option<String>,
    pub drive_type: Option<String>,
    pub report_data: serde_json::Value,
    pub report_url: Option<String>,
}
