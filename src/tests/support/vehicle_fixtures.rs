use chrono::{TimeZone, Utc};
use serde_json::json;

use crate::vehicle::application::domain::entities::{
    AuctionHistoryEntry, Vehicle, VehicleInspection,
};

pub fn sample_vehicle(id: i64) -> Vehicle {
    let listed = Utc.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap();
    Vehicle {
        id,
        mgmt_number: Some(format!("A{}", id)),
        car_number: Some("12가3456".to_string()),
        manufacturer: Some("Hyundai".to_string()),
        model_name: Some("Avante".to_string()),
        fuel_type: Some("gasoline".to_string()),
        transmission: Some("auto".to_string()),
        year: Some(2019),
        mileage: Some(42_000),
        price: Some(9_500_000),
        min_bid_price: Some(8_000_000),
        location: Some("Seoul".to_string()),
        organization: Some("Public Procurement Service".to_string()),
        due_date: Some(Utc.with_ymd_and_hms(2025, 2, 1, 14, 0, 0).unwrap()),
        auction_count: Some(1),
        status: Some("bidding-open".to_string()),
        image_urls: vec!["https://img.example.com/1.jpg".to_string()],
        detail_url: None,
        source: "automart".to_string(),
        source_id: format!("automart:A{}", id),
        final_price: None,
        result_status: None,
        result_date: None,
        case_number: None,
        court_name: None,
        property_type: None,
        has_inspection: false,
        created_at: listed,
        updated_at: listed,
    }
}

pub fn sample_history(vehicle_id: i64) -> Vec<AuctionHistoryEntry> {
    let recorded = Utc.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap();
    vec![AuctionHistoryEntry {
        id: 1,
        vehicle_id,
        auction_round: Some(1),
        listed_price: Some(9_500_000),
        min_bid_price: Some(8_000_000),
        final_price: None,
        status: "bidding-open".to_string(),
        bid_deadline: None,
        result_date: None,
        recorded_at: recorded,
    }]
}

pub fn sample_inspection(vehicle_id: i64) -> VehicleInspection {
    let scraped = Utc.with_ymd_and_hms(2025, 1, 11, 0, 0, 0).unwrap();
    VehicleInspection {
        id: 7,
        vehicle_id,
        inspection_date: Some(scraped),
        vin: Some("KMHD841CBLU000001".to_string()),
        displacement: Some(1598),
        mileage_at_inspection: Some(41_800),
        color: Some("white".to_string()),
        drive_type: Some("FF".to_string()),
        report_data: json!({"frame": "ok"}),
        report_url: None,
        scraped_at: Some(scraped),
        created_at: scraped,
        updated_at: scraped,
    }
}
