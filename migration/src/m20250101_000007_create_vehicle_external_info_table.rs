use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VehicleExternalInfo::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VehicleExternalInfo::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(VehicleExternalInfo::CarNumber).text().not_null())
                    .col(
                        ColumnDef::new(VehicleExternalInfo::Data)
                            .json_binary()
                            .not_null(),
                    )
                    .col(ColumnDef::new(VehicleExternalInfo::Source).text().not_null())
                    .col(
                        ColumnDef::new(VehicleExternalInfo::FetchedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(VehicleExternalInfo::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(VehicleExternalInfo::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .index(
                        Index::create()
                            .name("uq_vehicle_external_info_car_number_source")
                            .col(VehicleExternalInfo::CarNumber)
                            .col(VehicleExternalInfo::Source)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_vehicle_external_info_lookup
                ON vehicle_external_info (car_number, fetched_at DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VehicleExternalInfo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum VehicleExternalInfo {
    Table,
    Id,
    CarNumber,
    Data,
    Source,
    FetchedAt,
    CreatedAt,
    UpdatedAt,
}
