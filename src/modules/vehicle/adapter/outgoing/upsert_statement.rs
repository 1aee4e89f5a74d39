use sea_orm::{DatabaseBackend, Statement, Value};

use super::rows::vehicle_select_list;
use crate::vehicle::application::domain::upsert::{InspectionUpsert, VehicleUpsert};

/// Insert columns in bind order. `source` and `source_id` form the conflict
/// key and are never rewritten on merge.
const UPSERT_COLUMNS: [&str; 25] = [
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
];

const CONFLICT_KEY: [&str; 2] = ["source", "source_id"];

fn vehicle_values(v: VehicleUpsert) -> Vec<Value> {
    let image_urls = v.image_urls.map(|urls| serde_json::json!(urls));
    vec![
        v.mgmt_number.into(),
        v.car_number.into(),
        v.manufacturer.into(),
        v.model_name.into(),
        v.fuel_type.into(),
        v.transmission.into(),
        v.year.into(),
        v.mileage.into(),
        v.price.into(),
        v.min_bid_price.into(),
        v.location.into(),
        v.organization.into(),
        v.due_date.into(),
        v.auction_count.into(),
        v.status.into(),
        image_urls.into(),
        v.detail_url.into(),
        v.source.into(),
        v.source_id.into(),
        v.final_price.into(),
        v.result_status.into(),
        v.result_date.into(),
        v.case_number.into(),
        v.court_name.into(),
        v.property_type.into(),
    ]
}

/// Single-statement merge keyed by `(source, source_id)`. Absent values
/// keep the stored column; `updated_at` is always bumped.
pub fn vehicle_upsert_statement(vehicle: VehicleUpsert) -> Statement {
    let columns = UPSERT_COLUMNS.join(", ");
    let placeholders = (1..=UPSERT_COLUMNS.len())
        .map(|i| format!("${i}"))
        .collect::<Vec<_>>()
        .join(", ");
    let merges = UPSERT_COLUMNS
        .iter()
        .filter(|c| !CONFLICT_KEY.contains(*c))
        .map(|c| format!("{c} = COALESCE(EXCLUDED.{c}, vehicles.{c})"))
        .collect::<Vec<_>>()
        .join(",\n            ");

    let sql = format!(
        r#"
        INSERT INTO vehicles ({columns}, created_at, updated_at)
        VALUES ({placeholders}, NOW(), NOW())
        ON CONFLICT (source, source_id) DO UPDATE SET
            {merges},
            updated_at = NOW()
        RETURNING {returning}
        "#,
        returning = vehicle_select_list("vehicles"),
    );

    Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, vehicle_values(vehicle))
}

/// Oldest vehicle carrying the given `source_id`.
pub fn resolve_vehicle_by_source_id(source_id: &str) -> Statement {
    Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        "SELECT id FROM vehicles WHERE source_id = $1 ORDER BY id LIMIT 1",
        vec![source_id.into()],
    )
}

/// Merge keyed by `vehicle_id`. `report_data` is always replaced.
pub fn inspection_upsert_statement(vehicle_id: i64, inspection: InspectionUpsert) -> Statement {
    Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        r#"
        INSERT INTO vehicle_inspections (
            vehicle_id, inspection_date, vin, displacement,
            mileage_at_inspection, color, drive_type, report_data,
            report_url, scraped_at, created_at, updated_at
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, NOW(), NOW(), NOW())
        ON CONFLICT (vehicle_id) DO UPDATE SET
            inspection_date = COALESCE(EXCLUDED.inspection_date, vehicle_inspections.inspection_date),
            vin = COALESCE(EXCLUDED.vin, vehicle_inspections.vin),
            displacement = COALESCE(EXCLUDED.displacement, vehicle_inspections.displacement),
            mileage_at_inspection = COALESCE(EXCLUDED.mileage_at_inspection, vehicle_inspections.mileage_at_inspection),
            color = COALESCE(EXCLUDED.color, vehicle_inspections.color),
            drive_type = COALESCE(EXCLUDED.drive_type, vehicle_inspections.drive_type),
            report_data = EXCLUDED.report_data,
            report_url = COALESCE(EXCLUDED.report_url, vehicle_inspections.report_url),
            scraped_at = NOW(),
            updated_at = NOW()
        RETURNING id, vehicle_id, inspection_date, vin, displacement,
                  mileage_at_inspection, color, drive_type, report_data,
                  report_url, scraped_at, created_at, updated_at
        "#,
        vec![
            vehicle_id.into(),
            inspection.inspection_date.into(),
            inspection.vin.into(),
            inspection.displacement.into(),
            inspection.mileage_at_inspection.into(),
            inspection.color.into(),
            inspection.drive_type.into(),
            inspection.report_data.into(),
            inspection.report_url.into(),
        ],
    )
}
