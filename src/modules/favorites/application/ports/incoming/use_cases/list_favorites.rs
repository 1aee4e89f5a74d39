use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::favorites::application::ports::outgoing::FavoriteRepositoryError;
use crate::shared::pagination::{PageRequest, PageResult};
use crate::vehicle::application::domain::entities::Vehicle;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListFavoritesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<FavoriteRepositoryError> for ListFavoritesError {
    fn from(err: FavoriteRepositoryError) -> Self {
        ListFavoritesError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait ListFavoritesUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> Result<PageResult<Vehicle>, ListFavoritesError>;
}
