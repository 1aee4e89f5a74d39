use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::favorites::application::ports::incoming::use_cases::{
    ListFavoritesError, ListFavoritesUseCase,
};
use crate::favorites::application::ports::outgoing::FavoriteRepository;
use crate::shared::pagination::{PageRequest, PageResult};
use crate::vehicle::application::domain::entities::Vehicle;

pub struct ListFavoritesService<R>
where
    R: FavoriteRepository,
{
    repository: R,
}

impl<R> ListFavoritesService<R>
where
    R: FavoriteRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListFavoritesUseCase for ListFavoritesService<R>
where
    R: FavoriteRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> Result<PageResult<Vehicle>, ListFavoritesError> {
        Ok(self.repository.list(user_id, page).await?)
    }
}
