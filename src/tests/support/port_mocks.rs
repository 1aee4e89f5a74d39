use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;

use crate::auth::application::domain::entities::{NewUser, User, UserId};
use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};
use crate::auth::application::ports::outgoing::user_query::{UserQuery, UserQueryError};
use crate::auth::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};
use crate::email::application::ports::outgoing::user_email_notifier::{
    UserEmailNotificationError, UserEmailNotifier, VerificationRecipient,
};
use crate::favorites::application::ports::outgoing::{FavoriteRepository, FavoriteRepositoryError};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::vehicle::application::domain::entities::{
    AuctionHistoryEntry, Vehicle, VehicleExternalInfo, VehicleInspection,
};
use crate::vehicle::application::domain::listing::{VehicleListFilter, VehicleSort};
use crate::vehicle::application::domain::market_mapping::MarketMappings;
use crate::vehicle::application::domain::stats::{SourceCount, VehicleStats};
use crate::vehicle::application::domain::upsert::{InspectionUpsert, VehicleUpsert};
use crate::vehicle::application::ports::outgoing::{
    VehicleQuery, VehicleQueryError, VehicleRepository, VehicleRepositoryError,
};

mock! {
    pub UserQueryPort {}
    #[async_trait]
    impl UserQuery for UserQueryPort {
        async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError>;
        async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError>;
    }
}

mock! {
    pub UserRepositoryPort {}
    #[async_trait]
    impl UserRepository for UserRepositoryPort {
        async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError>;
        async fn store_verification_token(
            &self,
            user_id: UserId,
            token_hash: String,
            expires_at: DateTime<Utc>,
        ) -> Result<(), UserRepositoryError>;
        async fn consume_verification_token(
            &self,
            token_hash: &str,
        ) -> Result<Option<UserId>, UserRepositoryError>;
    }
}

mock! {
    pub PasswordHasherPort {}
    #[async_trait]
    impl PasswordHasher for PasswordHasherPort {
        async fn hash_password(&self, password: &str) -> Result<String, HashError>;
        async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
    }
}

mock! {
    pub EmailNotifierPort {}
    #[async_trait]
    impl UserEmailNotifier for EmailNotifierPort {
        async fn send_verification_email(
            &self,
            recipient: VerificationRecipient,
        ) -> Result<(), UserEmailNotificationError>;
    }
}

mock! {
    pub VehicleQueryPort {}
    #[async_trait]
    impl VehicleQuery for VehicleQueryPort {
        async fn list(
            &self,
            filter: VehicleListFilter,
            sort: VehicleSort,
            page: PageRequest,
        ) -> Result<PageResult<Vehicle>, VehicleQueryError>;
        async fn find_by_id(&self, id: i64) -> Result<Option<Vehicle>, VehicleQueryError>;
        async fn history(&self, vehicle_id: i64) -> Result<Vec<AuctionHistoryEntry>, VehicleQueryError>;
        async fn inspection(&self, vehicle_id: i64) -> Result<Option<VehicleInspection>, VehicleQueryError>;
        async fn find_by_car_number(&self, car_number: &str) -> Result<Vec<Vehicle>, VehicleQueryError>;
        async fn external_info(&self, car_number: &str) -> Result<Option<VehicleExternalInfo>, VehicleQueryError>;
        async fn stats(&self) -> Result<VehicleStats, VehicleQueryError>;
        async fn source_counts(&self) -> Result<Vec<SourceCount>, VehicleQueryError>;
        async fn market_mappings(&self) -> Result<MarketMappings, VehicleQueryError>;
    }
}

mock! {
    pub VehicleRepositoryPort {}
    #[async_trait]
    impl VehicleRepository for VehicleRepositoryPort {
        async fn upsert(&self, vehicle: VehicleUpsert) -> Result<Vehicle, VehicleRepositoryError>;
        async fn upsert_inspection(
            &self,
            inspection: InspectionUpsert,
        ) -> Result<VehicleInspection, VehicleRepositoryError>;
    }
}

mock! {
    pub FavoriteRepositoryPort {}
    #[async_trait]
    impl FavoriteRepository for FavoriteRepositoryPort {
        async fn add(&self, user_id: UserId, vehicle_id: i64) -> Result<(), FavoriteRepositoryError>;
        async fn remove(&self, user_id: UserId, vehicle_id: i64) -> Result<(), FavoriteRepositoryError>;
        async fn list(
            &self,
            user_id: UserId,
            page: PageRequest,
        ) -> Result<PageResult<Vehicle>, FavoriteRepositoryError>;
        async fn favorited_among(
            &self,
            user_id: UserId,
            vehicle_ids: Vec<i64>,
        ) -> Result<Vec<i64>, FavoriteRepositoryError>;
    }
}
