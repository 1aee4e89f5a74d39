use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::favorites::application::ports::outgoing::FavoriteRepositoryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddFavoriteError {
    #[error("Vehicle not found")]
    VehicleNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<FavoriteRepositoryError> for AddFavoriteError {
    fn from(err: FavoriteRepositoryError) -> Self {
        match err {
            FavoriteRepositoryError::VehicleNotFound => AddFavoriteError::VehicleNotFound,
            other => AddFavoriteError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait AddFavoriteUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId, vehicle_id: i64) -> Result<(), AddFavoriteError>;
}
