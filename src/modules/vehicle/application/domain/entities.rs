use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A listed vehicle plus the derived `has_inspection` flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Vehicle {
    #[schema(example = 1024)]
    pub id: i64,
    #[schema(example = "2024-0117")]
    pub mgmt_number: Option<String>,
    #[schema(example = "12가3456")]
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
    #[schema(example = "bidding-open")]
    pub status: Option<String>,
    pub image_urls: Vec<String>,
    pub detail_url: Option<String>,
    #[schema(example = "automart")]
    pub source: String,
    #[schema(example = "automart:2024-0117")]
    pub source_id: String,
    pub final_price: Option<i64>,
    pub result_status: Option<String>,
    pub result_date: Option<DateTime<Utc>>,
    pub case_number: Option<String>,
    pub court_name: Option<String>,
    pub property_type: Option<String>,
    pub has_inspection: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One row of the append-only auction history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AuctionHistoryEntry {
    pub id: i64,
    pub vehicle_id: i64,
    pub auction_round: Option<i32>,
    pub listed_price: Option<i64>,
    pub min_bid_price: Option<i64>,
    pub final_price: Option<i64>,
    #[schema(example = "sold")]
    pub status: String,
    pub bid_deadline: Option<DateTime<Utc>>,
    pub result_date: Option<DateTime<Utc>>,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VehicleInspection {
    pub id: i64,
    pub vehicle_id: i64,
    pub inspection_date: Option<DateTime<Utc>>,
    pub vin: Option<String>,
    pub displacement: Option<i32>,
    pub mileage_at_inspection: Option<i32>,
    pub color: Option<String>,
    pub drive_type: Option<String>,
    #[schema(value_type = Object)]
    pub report_data: serde_json::Value,
    pub report_url: Option<String>,
    pub scraped_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Third-party registry data cached per car number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VehicleExternalInfo {
    pub id: i64,
    pub car_number: String,
    #[schema(value_type = Object)]
    pub data: serde_json::Value,
    pub source: String,
    pub fetched_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CarNumberLookup {
    pub vehicles: Vec<Vehicle>,
    pub external_info: Option<VehicleExternalInfo>,
    #[schema(example = "https://www.car365.go.kr/acat/catIntgVhclHist.do?carNo=12%EA%B0%803456")]
    pub car365_url: String,
}

const CAR365_HISTORY_URL: &str = "https://www.car365.go.kr/acat/catIntgVhclHist.do";

/// Public registry page for a plate number.
pub fn car365_url(car_number: &str) -> String {
    format!(
        "{}?carNo={}",
        CAR365_HISTORY_URL,
        urlencoding::encode(car_number)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn car365_url_encodes_the_plate() {
        assert_eq!(
            car365_url("12가 3456"),
            "https://www.car365.go.kr/acat/catIntgVhclHist.do?carNo=12%EA%B0%80%203456"
        );
    }

    #[test]
    fn car365_url_keeps_ascii_plates_readable() {
        assert!(car365_url("ABC123").ends_with("carNo=ABC123"));
    }
}
