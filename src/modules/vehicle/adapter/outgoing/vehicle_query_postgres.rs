use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, QueryFilter, QueryOrder, Statement,
};

use super::listing_query_builder::build_listing_statements;
use super::rows::{vehicle_select_list, vehicles_from_rows, MalformedVehicleRow, VehicleRow};
use super::sea_orm_entity::{
    auction_history, market_fuel_mappings, market_manufacturer_mappings, market_model_mappings,
    vehicle_external_info, vehicle_inspections,
};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::vehicle::application::domain::entities::{
    AuctionHistoryEntry, Vehicle, VehicleExternalInfo, VehicleInspection,
};
use crate::vehicle::application::domain::listing::{
    VehicleListFilter, VehicleSort, RESULT_FAILED, RESULT_SOLD,
};
use crate::vehicle::application::domain::market_mapping::MarketMappings;
use crate::vehicle::application::domain::stats::{
    sale_rate, FuelTypeStats, PriceRange, SourceCount, SourceStats, StatusStats, VehicleStats,
};
use crate::vehicle::application::ports::outgoing::{VehicleQuery, VehicleQueryError};

#[derive(Clone, Debug)]
pub struct VehicleQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl VehicleQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn stmt(sql: impl Into<String>, values: Vec<sea_orm::Value>) -> Statement {
        Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, values)
    }
}

fn db_err(e: DbErr) -> VehicleQueryError {
    VehicleQueryError::DatabaseError(e.to_string())
}

impl From<MalformedVehicleRow> for VehicleQueryError {
    fn from(e: MalformedVehicleRow) -> Self {
        VehicleQueryError::SerializationError(e.to_string())
    }
}

// ============================================================================
// Stats rows
// ============================================================================

#[derive(Debug, FromQueryResult)]
struct PricedTotalsRow {
    total_count: i64,
    avg_price: f64,
    min_price: i64,
    max_price: i64,
}

#[derive(Debug, FromQueryResult)]
struct FuelTypeRow {
    fuel_type: String,
    count: i64,
    avg_price: f64,
}

#[derive(Debug, FromQueryResult)]
struct StatusRow {
    status: String,
    count: i64,
}

#[derive(Debug, FromQueryResult)]
struct SourceRow {
    source: String,
    count: i64,
    avg_price: f64,
}

#[derive(Debug, FromQueryResult)]
struct CompletedRow {
    completed_count: i64,
    sold_count: i64,
    avg_final_price: f64,
}

#[derive(Debug, FromQueryResult)]
struct SourceCountRow {
    source: String,
    count: i64,
}

const PRICED_TOTALS_SQL: &str = r#"
    SELECT COUNT(*) AS total_count,
           COALESCE(AVG(price), 0)::float8 AS avg_price,
           COALESCE(MIN(price), 0)::bigint AS min_price,
           COALESCE(MAX(price), 0)::bigint AS max_price
    FROM vehicles
    WHERE price IS NOT NULL
"#;

const BY_FUEL_TYPE_SQL: &str = r#"
    SELECT fuel_type, COUNT(*) AS count, COALESCE(AVG(price), 0)::float8 AS avg_price
    FROM vehicles
    WHERE fuel_type IS NOT NULL
    GROUP BY fuel_type
    ORDER BY count DESC
"#;

const BY_STATUS_SQL: &str = r#"
    SELECT status, COUNT(*) AS count
    FROM vehicles
    WHERE status IS NOT NULL
    GROUP BY status
    ORDER BY count DESC
"#;

const BY_SOURCE_SQL: &str = r#"
    SELECT source, COUNT(*) AS count, COALESCE(AVG(price), 0)::float8 AS avg_price
    FROM vehicles
    WHERE source IS NOT NULL
    GROUP BY source
    ORDER BY count DESC
"#;

const COMPLETED_SQL: &str = r#"
    SELECT COUNT(*) AS completed_count,
           COUNT(*) FILTER (WHERE result_status = $1) AS sold_count,
           COALESCE(AVG(final_price), 0)::float8 AS avg_final_price
    FROM vehicles
    WHERE result_status IN ($1, $2)
"#;

const SOURCE_COUNTS_SQL: &str = r#"
    SELECT source, COUNT(*) AS count
    FROM vehicles
    GROUP BY source
    ORDER BY count DESC
"#;

#[async_trait]
impl VehicleQuery for VehicleQueryPostgres {
    async fn list(
        &self,
        filter: VehicleListFilter,
        sort: VehicleSort,
        page: PageRequest,
    ) -> Result<PageResult<Vehicle>, VehicleQueryError> {
        let statements = build_listing_statements(&filter, &sort, &page);

        let total = self
            .db
            .query_one(statements.count)
            .await
            .map_err(db_err)?
            .map(|row| row.try_get::<i64>("", "total"))
            .transpose()
            .map_err(db_err)?
            .unwrap_or(0);

        let rows = VehicleRow::find_by_statement(statements.data)
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(PageResult::new(
            vehicles_from_rows(rows)?,
            page,
            total.max(0) as u64,
        ))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Vehicle>, VehicleQueryError> {
        let sql = format!(
            "SELECT {} FROM vehicles v WHERE v.id = $1",
            vehicle_select_list("v")
        );

        let row = VehicleRow::find_by_statement(Self::stmt(sql, vec![id.into()]))
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(row.map(Vehicle::try_from).transpose()?)
    }

    async fn history(&self, vehicle_id: i64) -> Result<Vec<AuctionHistoryEntry>, VehicleQueryError> {
        let entries = auction_history::Entity::find()
            .filter(auction_history::Column::VehicleId.eq(vehicle_id))
            .order_by_desc(auction_history::Column::RecordedAt)
            .order_by_desc(auction_history::Column::Id)
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(entries.into_iter().map(AuctionHistoryEntry::from).collect())
    }

    async fn inspection(
        &self,
        vehicle_id: i64,
    ) -> Result<Option<VehicleInspection>, VehicleQueryError> {
        let report = vehicle_inspections::Entity::find()
            .filter(vehicle_inspections::Column::VehicleId.eq(vehicle_id))
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(report.map(VehicleInspection::from))
    }

    async fn find_by_car_number(
        &self,
        car_number: &str,
    ) -> Result<Vec<Vehicle>, VehicleQueryError> {
        let sql = format!(
            "SELECT {} FROM vehicles v WHERE v.car_number = $1 ORDER BY v.created_at DESC, v.id DESC",
            vehicle_select_list("v")
        );

        let rows = VehicleRow::find_by_statement(Self::stmt(sql, vec![car_number.into()]))
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(vehicles_from_rows(rows)?)
    }

    async fn external_info(
        &self,
        car_number: &str,
    ) -> Result<Option<VehicleExternalInfo>, VehicleQueryError> {
        let info = vehicle_external_info::Entity::find()
            .filter(vehicle_external_info::Column::CarNumber.eq(car_number))
            .order_by_desc(vehicle_external_info::Column::FetchedAt)
            .order_by_desc(vehicle_external_info::Column::Id)
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(info.map(VehicleExternalInfo::from))
    }

    async fn stats(&self) -> Result<VehicleStats, VehicleQueryError> {
        let db = &*self.db;

        let totals = PricedTotalsRow::find_by_statement(Self::stmt(PRICED_TOTALS_SQL, vec![]))
            .one(db)
            .await
            .map_err(db_err)?;

        let by_fuel_type = FuelTypeRow::find_by_statement(Self::stmt(BY_FUEL_TYPE_SQL, vec![]))
            .all(db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(|r| FuelTypeStats {
                fuel_type: r.fuel_type,
                count: r.count,
                avg_price: r.avg_price,
            })
            .collect();

        let by_status = StatusRow::find_by_statement(Self::stmt(BY_STATUS_SQL, vec![]))
            .all(db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(|r| StatusStats {
                status: r.status,
                count: r.count,
            })
            .collect();

        let by_source = SourceRow::find_by_statement(Self::stmt(BY_SOURCE_SQL, vec![]))
            .all(db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(|r| SourceStats {
                source: r.source,
                count: r.count,
                avg_price: r.avg_price,
            })
            .collect();

        let completed = CompletedRow::find_by_statement(Self::stmt(
            COMPLETED_SQL,
            vec![RESULT_SOLD.into(), RESULT_FAILED.into()],
        ))
        .one(db)
        .await
        .map_err(db_err)?;

        let mut stats = VehicleStats {
            by_fuel_type,
            by_status,
            by_source,
            ..Default::default()
        };

        if let Some(t) = totals {
            stats.total_count = t.total_count;
            stats.avg_price = t.avg_price;
            stats.price_range = PriceRange {
                min: t.min_price,
                max: t.max_price,
            };
        }

        if let Some(c) = completed {
            stats.completed_count = c.completed_count;
            stats.avg_final_price = c.avg_final_price;
            stats.sale_rate = sale_rate(c.sold_count, c.completed_count);
        }

        Ok(stats)
    }

    async fn source_counts(&self) -> Result<Vec<SourceCount>, VehicleQueryError> {
        let rows = SourceCountRow::find_by_statement(Self::stmt(SOURCE_COUNTS_SQL, vec![]))
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(rows
            .into_iter()
            .map(|r| SourceCount {
                source: r.source,
                count: r.count,
            })
            .collect())
    }

    async fn market_mappings(&self) -> Result<MarketMappings, VehicleQueryError> {
        let manufacturers = market_manufacturer_mappings::Entity::find()
            .order_by_asc(market_manufacturer_mappings::Column::Id)
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        let fuel_types = market_fuel_mappings::Entity::find()
            .order_by_asc(market_fuel_mappings::Column::Id)
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        let models = market_model_mappings::Entity::find()
            .order_by_asc(market_model_mappings::Column::Id)
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(MarketMappings {
            manufacturers: manufacturers.into_iter().map(Into::into).collect(),
            fuel_types: fuel_types.into_iter().map(Into::into).collect(),
            models: models.into_iter().map(Into::into).collect(),
        })
    }
}
