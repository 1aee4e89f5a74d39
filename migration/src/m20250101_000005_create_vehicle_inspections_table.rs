use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VehicleInspections::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VehicleInspections::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(VehicleInspections::VehicleId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(VehicleInspections::InspectionDate)
                            .timestamp_with_time_zone(),
                    )
                    .col(ColumnDef::new(VehicleInspections::Vin).text())
                    .col(ColumnDef::new(VehicleInspections::Displacement).integer())
                    .col(ColumnDef::new(VehicleInspections::MileageAtInspection).integer())
                    .col(ColumnDef::new(VehicleInspections::Color).text())
                    .col(ColumnDef::new(VehicleInspections::DriveType).text())
                    .col(
                        ColumnDef::new(VehicleInspections::ReportData)
                            .json_binary()
                            .not_null(),
                    )
                    .col(ColumnDef::new(VehicleInspections::ReportUrl).text())
                    .col(ColumnDef::new(VehicleInspections::ScrapedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(VehicleInspections::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(VehicleInspections::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vehicle_inspections_vehicle_id")
                            .from(VehicleInspections::Table, VehicleInspections::VehicleId)
                            .to(Vehicles::Table, Vehicles::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_vehicle_inspections_updated_at
                BEFORE UPDATE ON vehicle_inspections
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VehicleInspections::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum VehicleInspections {
    Table,
    Id,
    VehicleId,
    InspectionDate,
    Vin,
    Displacement,
    MileageAtInspection,
    Color,
    DriveType,
    ReportData,
    ReportUrl,
    ScrapedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Vehicles {
    Table,
    Id,
}
