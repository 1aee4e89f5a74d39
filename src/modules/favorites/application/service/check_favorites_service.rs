use std::collections::{BTreeMap, HashSet};

use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::favorites::application::ports::incoming::use_cases::{
    CheckFavoritesError, CheckFavoritesUseCase,
};
use crate::favorites::application::ports::outgoing::FavoriteRepository;

pub struct CheckFavoritesService<R>
where
    R: FavoriteRepository,
{
    repository: R,
}

impl<R> CheckFavoritesService<R>
where
    R: FavoriteRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CheckFavoritesUseCase for CheckFavoritesService<R>
where
    R: FavoriteRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        vehicle_ids: Vec<i64>,
    ) -> Result<BTreeMap<i64, bool>, CheckFavoritesError> {
        if vehicle_ids.is_empty() {
            return Ok(BTreeMap::new());
        }

        let favorited: HashSet<i64> = self
            .repository
            .favorited_among(user_id, vehicle_ids.clone())
            .await?
            .into_iter()
            .collect();

        Ok(vehicle_ids
            .into_iter()
            .map(|id| (id, favorited.contains(&id)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorites::application::ports::outgoing::FavoriteRepositoryError;
    use crate::tests::support::port_mocks::MockFavoriteRepositoryPort;

    #[tokio::test]
    async fn every_requested_id_gets_an_answer() {
        let mut repo = MockFavoriteRepositoryPort::new();
        repo.expect_favorited_among()
            .withf(|_, ids| ids == &vec![1, 2, 3])
            .returning(|_, _| Ok(vec![2]));

        let result = CheckFavoritesService::new(repo)
            .execute(UserId::from(42), vec![1, 2, 3])
            .await
            .unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(result[&1], false);
        assert_eq!(result[&2], true);
        assert_eq!(result[&3], false);
    }

    #[tokio::test]
    async fn empty_request_skips_repository() {
        let repo = MockFavoriteRepositoryPort::new();

        let result = CheckFavoritesService::new(repo)
            .execute(UserId::from(42), vec![])
            .await
            .unwrap();

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn database_error_is_repository_error() {
        let mut repo = MockFavoriteRepositoryPort::new();
        repo.expect_favorited_among()
            .returning(|_, _| Err(FavoriteRepositoryError::DatabaseError("down".to_string())));

        let result = CheckFavoritesService::new(repo)
            .execute(UserId::from(42), vec![1])
            .await;

        assert!(matches!(result, Err(CheckFavoritesError::RepositoryError(_))));
    }
}
