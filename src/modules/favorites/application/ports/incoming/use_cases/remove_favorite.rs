use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::favorites::application::ports::outgoing::FavoriteRepositoryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoveFavoriteError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<FavoriteRepositoryError> for RemoveFavoriteError {
    fn from(err: FavoriteRepositoryError) -> Self {
        RemoveFavoriteError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait RemoveFavoriteUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId, vehicle_id: i64) -> Result<(), RemoveFavoriteError>;
}
