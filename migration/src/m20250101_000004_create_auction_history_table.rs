use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AuctionHistory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AuctionHistory::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AuctionHistory::VehicleId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AuctionHistory::AuctionRound).integer())
                    .col(ColumnDef::new(AuctionHistory::ListedPrice).big_integer())
                    .col(ColumnDef::new(AuctionHistory::MinBidPrice).big_integer())
                    .col(ColumnDef::new(AuctionHistory::FinalPrice).big_integer())
                    .col(ColumnDef::new(AuctionHistory::Status).text().not_null())
                    .col(ColumnDef::new(AuctionHistory::BidDeadline).timestamp_with_time_zone())
                    .col(ColumnDef::new(AuctionHistory::ResultDate).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(AuctionHistory::RecordedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_auction_history_vehicle_id")
                            .from(AuctionHistory::Table, AuctionHistory::VehicleId)
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
                CREATE INDEX IF NOT EXISTS idx_auction_history_vehicle_recorded
                ON auction_history (vehicle_id, recorded_at DESC);
                "#,
            )
            .await?;

        // Append one entry per insert and per change of the auction-relevant
        // columns. Rows are never updated afterwards.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE OR REPLACE FUNCTION record_auction_history()
                RETURNS TRIGGER AS $$
                BEGIN
                    IF TG_OP = 'INSERT'
                        OR NEW.auction_count IS DISTINCT FROM OLD.auction_count
                        OR NEW.status IS DISTINCT FROM OLD.status
                        OR NEW.price IS DISTINCT FROM OLD.price
                        OR NEW.result_status IS DISTINCT FROM OLD.result_status
                        OR NEW.final_price IS DISTINCT FROM OLD.final_price
                    THEN
                        INSERT INTO auction_history (
                            vehicle_id, auction_round, listed_price, min_bid_price,
                            final_price, status, bid_deadline, result_date, recorded_at
                        ) VALUES (
                            NEW.id, NEW.auction_count, NEW.price, NEW.min_bid_price,
                            NEW.final_price, COALESCE(NEW.result_status, NEW.status, 'unknown'),
                            NEW.due_date, NEW.result_date, NOW()
                        );
                    END IF;
                    RETURN NEW;
                END;
                $$ language 'plpgsql';
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER vehicles_record_auction_history
                AFTER INSERT OR UPDATE ON vehicles
                FOR EACH ROW
                EXECUTE FUNCTION record_auction_history();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS vehicles_record_auction_history ON vehicles;
                DROP FUNCTION IF EXISTS record_auction_history;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AuctionHistory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AuctionHistory {
    Table,
    Id,
    VehicleId,
    AuctionRound,
    ListedPrice,
    MinBidPrice,
    FinalPrice,
    Status,
    BidDeadline,
    ResultDate,
    RecordedAt,
}

#[derive(DeriveIden)]
enum Vehicles {
    Table,
    Id,
}
