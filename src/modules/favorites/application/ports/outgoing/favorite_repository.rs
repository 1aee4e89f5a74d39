use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::shared::pagination::{PageRequest, PageResult};
use crate::vehicle::application::domain::entities::Vehicle;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FavoriteRepositoryError {
    #[error("Vehicle not found")]
    VehicleNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// A user's saved vehicles. Pairs are unique.
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Adding an existing pair is a no-op.
    async fn add(&self, user_id: UserId, vehicle_id: i64) -> Result<(), FavoriteRepositoryError>;

    /// Removing a missing pair is a no-op.
    async fn remove(&self, user_id: UserId, vehicle_id: i64)
        -> Result<(), FavoriteRepositoryError>;

    /// Favorited vehicles, most recently favorited first.
    async fn list(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> Result<PageResult<Vehicle>, FavoriteRepositoryError>;

    /// The subset of `vehicle_ids` the user has favorited.
    async fn favorited_among(
        &self,
        user_id: UserId,
        vehicle_ids: Vec<i64>,
    ) -> Result<Vec<i64>, FavoriteRepositoryError>;
}
