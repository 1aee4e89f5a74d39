use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::FromQueryResult;

use super::sea_orm_entity::{
    auction_history, market_fuel_mappings, market_manufacturer_mappings, market_model_mappings,
    vehicle_external_info, vehicle_inspections,
};
use crate::vehicle::application::domain::entities::{
    AuctionHistoryEntry, Vehicle, VehicleExternalInfo, VehicleInspection,
};
use crate::vehicle::application::domain::market_mapping::{
    FuelMapping, ManufacturerMapping, ModelMapping,
};

/// Stored `vehicles` columns in select order.
pub const VEHICLE_FIELDS: [&str; 28] = [
    "id",
    "mgmt_number",
    "car_number",
    "manufacturer",
    "model_name",
    "fuel_type",
    "transmission",
    "year",
    "mileage",
    "price",
    "min_bid_price",
    "location",
    "organization",
    "due_date",
    "auction_count",
    "status",
    "image_urls",
    "detail_url",
    "source",
    "source_id",
    "final_price",
    "result_status",
    "result_date",
    "case_number",
    "court_name",
    "property_type",
    "created_at",
    "updated_at",
];

/// `alias.col, ...` plus the derived `has_inspection` flag.
pub fn vehicle_select_list(alias: &str) -> String {
    let columns = VEHICLE_FIELDS
        .iter()
        .map(|c| format!("{alias}.{c}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{columns}, EXISTS (SELECT 1 FROM vehicle_inspections vi WHERE vi.vehicle_id = {alias}.id) AS has_inspection"
    )
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct VehicleRow {
    pub id: i64,
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
    pub due_date: Option<DateTime<FixedOffset>>,
    pub auction_count: Option<i32>,
    pub status: Option<String>,
    pub image_urls: Option<serde_json::Value>,
    pub detail_url: Option<String>,
    pub source: String,
    pub source_id: String,
    pub final_price: Option<i64>,
    pub result_status: Option<String>,
    pub result_date: Option<DateTime<FixedOffset>>,
    pub case_number: Option<String>,
    pub court_name: Option<String>,
    pub property_type: Option<String>,
    pub has_inspection: bool,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

fn utc(at: DateTime<FixedOffset>) -> DateTime<Utc> {
    at.with_timezone(&Utc)
}

/// `image_urls` must be a JSON array of strings when present.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("vehicle {id}: image_urls is not a string array: {reason}")]
pub struct MalformedVehicleRow {
    pub id: i64,
    pub reason: String,
}

impl TryFrom<VehicleRow> for Vehicle {
    type Error = MalformedVehicleRow;

    fn try_from(row: VehicleRow) -> Result<Self, Self::Error> {
        let image_urls = match row.image_urls {
            None | Some(serde_json::Value::Null) => Vec::new(),
            Some(raw) => serde_json::from_value::<Vec<String>>(raw).map_err(|e| {
                MalformedVehicleRow {
                    id: row.id,
                    reason: e.to_string(),
                }
            })?,
        };

        Ok(Vehicle {
            id: row.id,
            mgmt_number: row.mgmt_number,
            car_number: row.car_number,
            manufacturer: row.manufacturer,
            model_name: row.model_name,
            fuel_type: row.fuel_type,
            transmission: row.transmission,
            year: row.year,
            mileage: row.mileage,
            price: row.price,
            min_bid_price: row.min_bid_price,
            location: row.location,
            organization: row.organization,
            due_date: row.due_date.map(utc),
            auction_count: row.auction_count,
            status: row.status,
            image_urls,
            detail_url: row.detail_url,
            source: row.source,
            source_id: row.source_id,
            final_price: row.final_price,
            result_status: row.result_status,
            result_date: row.result_date.map(utc),
            case_number: row.case_number,
            court_name: row.court_name,
            property_type: row.property_type,
            has_inspection: row.has_inspection,
            created_at: utc(row.created_at),
            updated_at: utc(row.updated_at),
        })
    }
}

pub fn vehicles_from_rows(rows: Vec<VehicleRow>) -> Result<Vec<Vehicle>, MalformedVehicleRow> {
    rows.into_iter().map(Vehicle::try_from).collect()
}

impl From<auction_history::Model> for AuctionHistoryEntry {
    fn from(model: auction_history::Model) -> Self {
        AuctionHistoryEntry {
            id: model.id,
            vehicle_id: model.vehicle_id,
            auction_round: model.auction_round,
            listed_price: model.listed_price,
            min_bid_price: model.min_bid_price,
            final_price: model.final_price,
            status: model.status,
            bid_deadline: model.bid_deadline.map(utc),
            result_date: model.result_date.map(utc),
            recorded_at: utc(model.recorded_at),
        }
    }
}

impl From<vehicle_inspections::Model> for VehicleInspection {
    fn from(model: vehicle_inspections::Model) -> Self {
        VehicleInspection {
            id: model.id,
            vehicle_id: model.vehicle_id,
            inspection_date: model.inspection_date.map(utc),
            vin: model.vin,
            displacement: model.displacement,
            mileage_at_inspection: model.mileage_at_inspection,
            color: model.color,
            drive_type: model.drive_type,
            report_data: model.report_data,
            report_url: model.report_url,
            scraped_at: model.scraped_at.map(utc),
            created_at: utc(model.created_at),
            updated_at: utc(model.updated_at),
        }
    }
}

impl From<vehicle_external_info::Model> for VehicleExternalInfo {
    fn from(model: vehicle_external_info::Model) -> Self {
        VehicleExternalInfo {
            id: model.id,
            car_number: model.car_number,
            data: model.data,
            source: model.source,
            fetched_at: utc(model.fetched_at),
            created_at: utc(model.created_at),
            updated_at: utc(model.updated_at),
        }
    }
}

impl From<market_manufacturer_mappings::Model> for ManufacturerMapping {
    fn from(model: market_manufacturer_mappings::Model) -> Self {
        ManufacturerMapping {
            id: i64::from(model.id),
            internal_name: model.internal_name,
            korean_name: model.korean_name,
            is_foreign: model.is_foreign,
            kcar_code: model.kcar_code,
            encar_name: model.encar_name,
        }
    }
}

impl From<market_fuel_mappings::Model> for FuelMapping {
    fn from(model: market_fuel_mappings::Model) -> Self {
        FuelMapping {
            id: i64::from(model.id),
            internal_name: model.internal_name,
            encar_name: model.encar_name,
            kcar_code: model.kcar_code,
        }
    }
}

impl From<market_model_mappings::Model> for ModelMapping {
    fn from(model: market_model_mappings::Model) -> Self {
        ModelMapping {
            id: i64::from(model.id),
            internal_name: model.internal_name,
            manufacturer_korean: model.manufacturer_korean,
            encar_model_group: model.encar_model_group,
            kcar_model_code: model.kcar_model_code,
        }
    }
}
