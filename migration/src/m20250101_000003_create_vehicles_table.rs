use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Vehicles::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Vehicles::MgmtNumber).text())
                    .col(ColumnDef::new(Vehicles::CarNumber).text())
                    .col(ColumnDef::new(Vehicles::Manufacturer).text())
                    .col(ColumnDef::new(Vehicles::ModelName).text())
                    .col(ColumnDef::new(Vehicles::FuelType).text())
                    .col(ColumnDef::new(Vehicles::Transmission).text())
                    .col(ColumnDef::new(Vehicles::Year).integer())
                    .col(ColumnDef::new(Vehicles::Mileage).integer())
                    .col(ColumnDef::new(Vehicles::Price).big_integer())
                    .col(ColumnDef::new(Vehicles::MinBidPrice).big_integer())
                    .col(ColumnDef::new(Vehicles::Location).text())
                    .col(ColumnDef::new(Vehicles::Organization).text())
                    .col(ColumnDef::new(Vehicles::DueDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(Vehicles::AuctionCount).integer())
                    .col(ColumnDef::new(Vehicles::Status).text())
                    .col(ColumnDef::new(Vehicles::ImageUrls).json_binary())
                    .col(ColumnDef::new(Vehicles::DetailUrl).text())
                    .col(ColumnDef::new(Vehicles::Source).text().not_null())
                    .col(ColumnDef::new(Vehicles::SourceId).text().not_null())
                    .col(ColumnDef::new(Vehicles::FinalPrice).big_integer())
                    .col(ColumnDef::new(Vehicles::ResultStatus).text())
                    .col(ColumnDef::new(Vehicles::ResultDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(Vehicles::CaseNumber).text())
                    .col(ColumnDef::new(Vehicles::CourtName).text())
                    .col(ColumnDef::new(Vehicles::PropertyType).text())
                    .col(
                        ColumnDef::new(Vehicles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Vehicles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Upsert key
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_vehicles_source_source_id
                ON vehicles (source, source_id);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE vehicles
                    ADD CONSTRAINT chk_vehicles_non_negative CHECK (
                        (year IS NULL OR year >= 0)
                        AND (mileage IS NULL OR mileage >= 0)
                        AND (price IS NULL OR price >= 0)
                        AND (min_bid_price IS NULL OR min_bid_price >= 0)
                        AND (final_price IS NULL OR final_price >= 0)
                        AND (auction_count IS NULL OR auction_count >= 0)
                    );
                "#,
            )
            .await?;

        // Sort and filter columns used by the listing endpoint
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_vehicles_created_at ON vehicles (created_at DESC, id DESC);
                CREATE INDEX IF NOT EXISTS idx_vehicles_price ON vehicles (price);
                CREATE INDEX IF NOT EXISTS idx_vehicles_year ON vehicles (year);
                CREATE INDEX IF NOT EXISTS idx_vehicles_due_date ON vehicles (due_date);
                CREATE INDEX IF NOT EXISTS idx_vehicles_status ON vehicles (status);
                CREATE INDEX IF NOT EXISTS idx_vehicles_result_status ON vehicles (result_status);
                CREATE INDEX IF NOT EXISTS idx_vehicles_fuel_type ON vehicles (fuel_type);
                CREATE INDEX IF NOT EXISTS idx_vehicles_car_number ON vehicles (car_number);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_vehicles_updated_at
                BEFORE UPDATE ON vehicles
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TRIGGER IF EXISTS update_vehicles_updated_at ON vehicles")
            .await?;

        manager
            .drop_table(Table::drop().table(Vehicles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Vehicles {
    Table,
    Id,
    MgmtNumber,
    CarNumber,
    Manufacturer,
    ModelName,
    FuelType,
    Transmission,
    Year,
    Mileage,
    Price,
    MinBidPrice,
    Location,
    Organization,
    DueDate,
    AuctionCount,
    Status,
    ImageUrls,
    DetailUrl,
    Source,
    SourceId,
    FinalPrice,
    ResultStatus,
    ResultDate,
    CaseNumber,
    CourtName,
    PropertyType,
    CreatedAt,
    UpdatedAt,
}
