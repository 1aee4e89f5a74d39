use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PriceRange {
    pub min: i64,
    pub max: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FuelTypeStats {
    pub fuel_type: String,
    pub count: i64,
    pub avg_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatusStats {
    pub status: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SourceStats {
    pub source: String,
    pub count: i64,
    pub avg_price: f64,
}

/// Aggregates over the whole `vehicles` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VehicleStats {
    /// Vehicles with a price
    pub total_count: i64,
    pub avg_price: f64,
    pub price_range: PriceRange,
    pub by_fuel_type: Vec<FuelTypeStats>,
    pub by_status: Vec<StatusStats>,
    pub by_source: Vec<SourceStats>,
    /// Vehicles whose auction ended as sold or failed
    pub completed_count: i64,
    pub avg_final_price: f64,
    /// Percentage of completed auctions that sold
    pub sale_rate: f64,
}

/// `sold / completed * 100`, or 0 when nothing has completed.
pub fn sale_rate(sold: i64, completed: i64) -> f64 {
    if completed <= 0 {
        return 0.0;
    }
    sold as f64 / completed as f64 * 100.0
}

/// Row count for one ingestion source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceCount {
    pub source: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SourceInfo {
    #[schema(example = "automart")]
    pub source: String,
    #[schema(example = "Automart Public Sale")]
    pub name: String,
    pub count: i64,
}

impl From<SourceCount> for SourceInfo {
    fn from(value: SourceCount) -> Self {
        Self {
            name: source_display_name(&value.source).to_string(),
            source: value.source,
            count: value.count,
        }
    }
}

pub fn source_display_name(source: &str) -> &str {
    match source {
        "automart" => "Automart Public Sale",
        "court_auction" => "Court Auction",
        "onbid" => "Onbid",
        other => other,
    }
}
