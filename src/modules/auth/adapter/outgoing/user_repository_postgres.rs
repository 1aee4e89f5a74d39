use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait,
    Set, Statement, TransactionTrait,
};
use std::sync::Arc;
use tracing::debug;

use crate::auth::application::domain::entities::{NewUser, User, UserId};
use crate::modules::auth::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::email_verification_tokens::{
    ActiveModel as TokenActiveModel, Entity as TokenEntity,
};
use super::sea_orm_entity::users::ActiveModel as UserActiveModel;

const CONSUME_TOKEN_SQL: &str = r#"UPDATE email_verification_tokens
SET used_at = NOW()
WHERE token_hash = $1 AND used_at IS NULL AND expires_at > NOW()
RETURNING user_id"#;

const MARK_VERIFIED_SQL: &str = r#"UPDATE users
SET email_verified = TRUE, email_verified_at = NOW(), updated_at = NOW()
WHERE id = $1"#;

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn is_unique_violation(e: &DbErr) -> bool {
        let err_str = e.to_string().to_lowercase();
        err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
    }

    fn db_error(e: DbErr) -> UserRepositoryError {
        UserRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: NotSet,
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            name: Set(user.name),
            email_verified: Set(false),
            email_verified_at: Set(None),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            if Self::is_unique_violation(&e) {
                return UserRepositoryError::UserAlreadyExists;
            }
            Self::db_error(e)
        })?;

        Ok(User::from(inserted))
    }

    async fn store_verification_token(
        &self,
        user_id: UserId,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError> {
        let token = TokenActiveModel {
            id: NotSet,
            user_id: Set(user_id.value()),
            token_hash: Set(token_hash),
            expires_at: Set(expires_at.fixed_offset()),
            used_at: Set(None),
            created_at: NotSet,
        };

        TokenEntity::insert(token)
            .exec_without_returning(&*self.db)
            .await
            .map_err(Self::db_error)?;

        Ok(())
    }

    async fn consume_verification_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<UserId>, UserRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::db_error)?;

        let consumed = txn
            .query_one(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                CONSUME_TOKEN_SQL,
                [token_hash.into()],
            ))
            .await
            .map_err(Self::db_error)?;

        let Some(row) = consumed else {
            debug!("Verification token unknown, used or expired");
            txn.rollback().await.map_err(Self::db_error)?;
            return Ok(None);
        };

        let user_id: i64 = row.try_get("", "user_id").map_err(Self::db_error)?;

        txn.execute(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            MARK_VERIFIED_SQL,
            [user_id.into()],
        ))
        .await
        .map_err(Self::db_error)?;

        txn.commit().await.map_err(Self::db_error)?;

        Ok(Some(UserId::from(user_id)))
    }
}
