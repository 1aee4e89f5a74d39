use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MarketManufacturerMappings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MarketManufacturerMappings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(MarketManufacturerMappings::InternalName)
                            .text()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(MarketManufacturerMappings::KoreanName)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MarketManufacturerMappings::IsForeign)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(MarketManufacturerMappings::KcarCode).text())
                    .col(ColumnDef::new(MarketManufacturerMappings::EncarName).text())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MarketFuelMappings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MarketFuelMappings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(MarketFuelMappings::InternalName)
                            .text()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(MarketFuelMappings::EncarName).text())
                    .col(ColumnDef::new(MarketFuelMappings::KcarCode).text())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MarketModelMappings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MarketModelMappings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(MarketModelMappings::InternalName)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MarketModelMappings::ManufacturerKorean)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MarketModelMappings::EncarModelGroup).text())
                    .col(ColumnDef::new(MarketModelMappings::KcarModelCode).text())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MarketModelMappings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MarketFuelMappings::Table).to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(MarketManufacturerMappings::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum MarketManufacturerMappings {
    Table,
    Id,
    InternalName,
    KoreanName,
    IsForeign,
    KcarCode,
    EncarName,
}

#[derive(DeriveIden)]
enum MarketFuelMappings {
    Table,
    Id,
    InternalName,
    EncarName,
    KcarCode,
}

#[derive(DeriveIden)]
enum MarketModelMappings {
    Table,
    Id,
    InternalName,
    ManufacturerKorean,
    EncarModelGroup,
    KcarModelCode,
}
