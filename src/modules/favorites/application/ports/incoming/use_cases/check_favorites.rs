use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::favorites::application::ports::outgoing::FavoriteRepositoryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckFavoritesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<FavoriteRepositoryError> for CheckFavoritesError {
    fn from(err: FavoriteRepositoryError) -> Self {
        CheckFavoritesError::RepositoryError(err.to_string())
    }
}

/// Every requested id maps to whether the user has favorited it.
#[async_trait]
pub trait CheckFavoritesUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        vehicle_ids: Vec<i64>,
    ) -> Result<BTreeMap<i64, bool>, CheckFavoritesError>;
}
