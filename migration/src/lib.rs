pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_users_table;
mod m20250101_000002_create_email_verification_tokens_table;
mod m20250101_000003_create_vehicles_table;
mod m20250101_000004_create_auction_history_table;
mod m20250101_000005_create_vehicle_inspections_table;
mod m20250101_000006_create_user_favorites_table;
mod m20250101_000007_create_vehicle_external_info_table;
mod m20250101_000008_create_market_mapping_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_users_table::Migration),
            Box::new(m20250101_000002_create_email_verification_tokens_table::Migration),
            Box::new(m20250101_000003_create_vehicles_table::Migration),
            Box::new(m20250101_000004_create_auction_history_table::Migration),
            Box::new(m20250101_000005_create_vehicle_inspections_table::Migration),
            Box::new(m20250101_000006_create_user_favorites_table::Migration),
            Box::new(m20250101_000007_create_vehicle_external_info_table::Migration),
            Box::new(m20250101_000008_create_market_mapping_tables::Migration),
        ]
    }
}
