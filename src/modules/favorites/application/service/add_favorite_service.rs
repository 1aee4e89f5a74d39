use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::favorites::application::ports::incoming::use_cases::{
    AddFavoriteError, AddFavoriteUseCase,
};
use crate::favorites::application::ports::outgoing::FavoriteRepository;

pub struct AddFavoriteService<R>
where
    R: FavoriteRepository,
{
    repository: R,
}

impl<R> AddFavoriteService<R>
where
    R: FavoriteRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> AddFavoriteUseCase for AddFavoriteService<R>
where
    R: FavoriteRepository + Send + Sync,
{
    async fn execute(&self, user_id: UserId, vehicle_id: i64) -> Result<(), AddFavoriteError> {
        self.repository.add(user_id, vehicle_id).await?;
        info!(user_id = user_id.value(), vehicle_id, "Favorite added");
        Ok(())
    }
}
