use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr,
    EntityTrait, FromQueryResult, QueryFilter, QuerySelect, SqlErr, Statement,
};
use tracing::warn;

use super::sea_orm_entity::user_favorites;
use crate::auth::application::domain::entities::UserId;
use crate::favorites::application::ports::outgoing::{
    FavoriteRepository, FavoriteRepositoryError,
};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::vehicle::adapter::outgoing::rows::{vehicle_select_list, vehicles_from_rows, VehicleRow};
use crate::vehicle::application::domain::entities::Vehicle;

#[derive(Clone, Debug)]
pub struct FavoriteRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FavoriteRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> FavoriteRepositoryError {
        FavoriteRepositoryError::DatabaseError(e.to_string())
    }

    fn stmt(sql: impl Into<String>, values: Vec<sea_orm::Value>) -> Statement {
        Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, values)
    }

    async fn vehicle_exists(&self, vehicle_id: i64) -> Result<bool, FavoriteRepositoryError> {
        let row = self
            .db
            .query_one(Self::stmt(
                "SELECT EXISTS (SELECT 1 FROM vehicles WHERE id = $1) AS found",
                vec![vehicle_id.into()],
            ))
            .await
            .map_err(Self::map_db_err)?;

        match row {
            Some(row) => row.try_get::<bool>("", "found").map_err(Self::map_db_err),
            None => Ok(false),
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct FavoritedRow {
    vehicle_id: i64,
}

#[async_trait]
impl FavoriteRepository for FavoriteRepositoryPostgres {
    async fn add(&self, user_id: UserId, vehicle_id: i64) -> Result<(), FavoriteRepositoryError> {
        if !self.vehicle_exists(vehicle_id).await? {
            return Err(FavoriteRepositoryError::VehicleNotFound);
        }

        let favorite = user_favorites::ActiveModel {
            user_id: Set(user_id.value()),
            vehicle_id: Set(vehicle_id),
            ..Default::default()
        };

        let result = user_favorites::Entity::insert(favorite)
            .on_conflict(
                OnConflict::columns([
                    user_favorites::Column::UserId,
                    user_favorites::Column::VehicleId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await;

        match result {
            Ok(_) => Ok(()),
            // Vehicle deleted between the existence check and the insert.
            Err(e) if matches!(e.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))) => {
                warn!(vehicle_id, "Favorite insert hit a missing vehicle");
                Err(FavoriteRepositoryError::VehicleNotFound)
            }
            Err(e) => Err(Self::map_db_err(e)),
        }
    }

    async fn remove(
        &self,
        user_id: UserId,
        vehicle_id: i64,
    ) -> Result<(), FavoriteRepositoryError> {
        user_favorites::Entity::delete_many()
            .filter(user_favorites::Column::UserId.eq(user_id.value()))
            .filter(user_favorites::Column::VehicleId.eq(vehicle_id))
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(())
    }

    async fn list(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> Result<PageResult<Vehicle>, FavoriteRepositoryError> {
        let total = self
            .db
            .query_one(Self::stmt(
                "SELECT COUNT(*) AS total FROM user_favorites uf \
                 JOIN vehicles v ON v.id = uf.vehicle_id WHERE uf.user_id = $1",
                vec![user_id.value().into()],
            ))
            .await
            .map_err(Self::map_db_err)?
            .map(|row| row.try_get::<i64>("", "total"))
            .transpose()
            .map_err(Self::map_db_err)?
            .unwrap_or(0);

        let sql = format!(
            "SELECT {} FROM user_favorites uf JOIN vehicles v ON v.id = uf.vehicle_id \
             WHERE uf.user_id = $1 ORDER BY uf.created_at DESC, uf.id DESC LIMIT $2 OFFSET $3",
            vehicle_select_list("v")
        );
        let rows = VehicleRow::find_by_statement(Self::stmt(
            sql,
            vec![
                user_id.value().into(),
                (page.limit() as i64).into(),
                page.offset().into(),
            ],
        ))
        .all(&*self.db)
        .await
        .map_err(Self::map_db_err)?;

        let vehicles = vehicles_from_rows(rows)
            .map_err(|e| FavoriteRepositoryError::SerializationError(e.to_string()))?;

        Ok(PageResult::new(vehicles, page, total.max(0) as u64))
    }

    async fn favorited_among(
        &self,
        user_id: UserId,
        vehicle_ids: Vec<i64>,
    ) -> Result<Vec<i64>, FavoriteRepositoryError> {
        let rows = user_favorites::Entity::find()
            .select_only()
            .column(user_favorites::Column::VehicleId)
            .filter(user_favorites::Column::UserId.eq(user_id.value()))
            .filter(user_favorites::Column::VehicleId.is_in(vehicle_ids))
            .into_model::<FavoritedRow>()
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(rows.into_iter().map(|r| r.vehicle_id).collect())
    }
}
