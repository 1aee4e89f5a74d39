use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, TransactionTrait,
};
use tracing::warn;

use super::rows::VehicleRow;
use super::sea_orm_entity::vehicle_inspections;
use super::upsert_statement::{
    inspection_upsert_statement, resolve_vehicle_by_source_id, vehicle_upsert_statement,
};
use crate::vehicle::application::domain::entities::{Vehicle, VehicleInspection};
use crate::vehicle::application::domain::upsert::{InspectionUpsert, VehicleUpsert};
use crate::vehicle::application::ports::outgoing::{VehicleRepository, VehicleRepositoryError};

#[derive(Clone, Debug)]
pub struct VehicleRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl VehicleRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> VehicleRepositoryError {
        VehicleRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl VehicleRepository for VehicleRepositoryPostgres {
    async fn upsert(&self, vehicle: VehicleUpsert) -> Result<Vehicle, VehicleRepositoryError> {
        let row = VehicleRow::find_by_statement(vehicle_upsert_statement(vehicle))
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or_else(|| {
                VehicleRepositoryError::DatabaseError("Upsert returned no row".to_string())
            })?;

        Vehicle::try_from(row).map_err(|e| VehicleRepositoryError::SerializationError(e.to_string()))
    }

    async fn upsert_inspection(
        &self,
        inspection: InspectionUpsert,
    ) -> Result<VehicleInspection, VehicleRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        let resolved = txn
            .query_one(resolve_vehicle_by_source_id(&inspection.vehicle_source_id))
            .await
            .map_err(Self::map_db_err)?;

        let vehicle_id: i64 = match resolved {
            Some(row) => row.try_get("", "id").map_err(Self::map_db_err)?,
            None => {
                warn!(
                    source_id = %inspection.vehicle_source_id,
                    "Inspection for unknown vehicle"
                );
                let _ = txn.rollback().await;
                return Err(VehicleRepositoryError::VehicleNotFound);
            }
        };

        let model = vehicle_inspections::Entity::find()
            .from_raw_sql(inspection_upsert_statement(vehicle_id, inspection))
            .one(&txn)
            .await
            .map_err(Self::map_db_err)?
            .ok_or_else(|| {
                VehicleRepositoryError::DatabaseError(
                    "Inspection upsert returned no row".to_string(),
                )
            })?;

        txn.commit().await.map_err(Self::map_db_err)?;

        Ok(VehicleInspection::from(model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::adapter::outgoing::rows::test_rows::vehicle_row;
    use chrono::Utc;
    use sea_orm::sea_query::Value;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use serde_json::json;
    use std::collections::BTreeMap;

    fn upsert() -> VehicleUpsert {
        VehicleUpsert {
            mgmt_number: "A1".to_string(),
            price: Some(1000),
            source: "automart".to_string(),
            source_id: "automart:A1".to_string(),
            ..Default::default()
        }
    }

    fn inspection() -> InspectionUpsert {
        InspectionUpsert {
            vehicle_source_id: "automart:A1".to_string(),
            inspection_date: None,
            vin: Some("KMHD841CBLU000001".to_string()),
            displacement: None,
            mileage_at_inspection: None,
            color: None,
            drive_type: None,
            report_data: json!({"frame": "ok"}),
            report_url: None,
        }
    }

    fn inspection_model(vehicle_id: i64) -> vehicle_inspections::Model {
        let now = Utc::now().fixed_offset();
        vehicle_inspections::Model {
            id: 11,
            vehicle_id,
            inspection_date: None,
            vin: Some("KMHD841CBLU000001".to_string()),
            displacement: None,
            mileage_at_inspection: None,
            color: None,
            drive_type: None,
            report_data: json!({"frame": "ok"}),
            report_url: None,
            scraped_at: Some(now),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn upsert_returns_merged_row() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![vehicle_row(1)]])
                .into_connection(),
        );
        let repo = VehicleRepositoryPostgres::new(db.clone());

        let vehicle = repo.upsert(upsert()).await.unwrap();
        assert_eq!(vehicle.id, 1);

        drop(repo);
        let log = format!("{:?}", Arc::try_unwrap(db).unwrap().into_transaction_log());
        assert!(log.contains("ON CONFLICT (source, source_id) DO UPDATE"));
        assert!(log.contains("price = COALESCE(EXCLUDED.price, vehicles.price)"));
    }

    #[tokio::test]
    async fn upsert_database_error_is_reported() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("unique violation".to_string())])
            .into_connection();
        let repo = VehicleRepositoryPostgres::new(Arc::new(db));

        let result = repo.upsert(upsert()).await;

        assert!(matches!(result, Err(VehicleRepositoryError::DatabaseError(msg)) if msg.contains("unique violation")));
    }

    #[tokio::test]
    async fn inspection_resolves_vehicle_then_merges() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![BTreeMap::from([(
                    "id".to_string(),
                    Value::BigInt(Some(5)),
                )])]])
                .append_query_results(vec![vec![inspection_model(5)]])
                .into_connection(),
        );
        let repo = VehicleRepositoryPostgres::new(db.clone());

        let report = repo.upsert_inspection(inspection()).await.unwrap();
        assert_eq!(report.vehicle_id, 5);
        assert_eq!(report.report_data["frame"], "ok");

        drop(repo);
        let log = format!("{:?}", Arc::try_unwrap(db).unwrap().into_transaction_log());
        assert!(log.contains("SELECT id FROM vehicles WHERE source_id = $1"));
        assert!(log.contains("ON CONFLICT (vehicle_id) DO UPDATE"));
    }

    #[tokio::test]
    async fn inspection_for_unknown_source_id_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<BTreeMap<String, Value>>::new()])
            .into_connection();
        let repo = VehicleRepositoryPostgres::new(Arc::new(db));

        let result = repo.upsert_inspection(inspection()).await;

        assert_eq!(result.unwrap_err(), VehicleRepositoryError::VehicleNotFound);
    }
}
