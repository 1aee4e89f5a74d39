use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::auth::application::domain::entities::{AuthSession, NewUser, User, UserId};
use crate::auth::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};
use crate::auth::application::use_cases::get_current_user::{
    GetCurrentUserError, IGetCurrentUserUseCase,
};
use crate::auth::application::use_cases::login_user::{ILoginUserUseCase, LoginError, LoginRequest};
use crate::auth::application::use_cases::refresh_token::{
    IRefreshTokenUseCase, RefreshTokenError, RefreshTokenRequest,
};
use crate::auth::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterUserError, RegisterUserInput,
};
use crate::auth::application::use_cases::resend_verification::{
    IResendVerificationUseCase, ResendVerificationError,
};
use crate::auth::application::use_cases::verify_email::{IVerifyEmailUseCase, VerifyEmailError};
use crate::email::application::ports::outgoing::user_email_notifier::{
    UserEmailNotificationError, UserEmailNotifier, VerificationRecipient,
};
use crate::favorites::application::ports::incoming::use_cases::{
    AddFavoriteError, AddFavoriteUseCase, CheckFavoritesError, CheckFavoritesUseCase,
    ListFavoritesError, ListFavoritesUseCase, RemoveFavoriteError, RemoveFavoriteUseCase,
};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::tests::support::auth_helper::test_helpers::test_user;
use crate::tests::support::vehicle_fixtures::{sample_history, sample_inspection, sample_vehicle};
use crate::vehicle::application::domain::entities::{
    car365_url, AuctionHistoryEntry, CarNumberLookup, Vehicle, VehicleInspection,
};
use crate::vehicle::application::domain::listing::{VehicleListFilter, VehicleSort};
use crate::vehicle::application::domain::market_mapping::{ManufacturerMapping, MarketMappings};
use crate::vehicle::application::domain::stats::{
    PriceRange, SourceCount, SourceInfo, VehicleStats,
};
use crate::vehicle::application::ports::incoming::use_cases::{
    GetMarketMappingsError, GetMarketMappingsUseCase, GetSourcesError, GetSourcesUseCase,
    GetStatsError, GetStatsUseCase, GetVehicleError, GetVehicleHistoryError,
    GetVehicleHistoryUseCase, GetVehicleInspectionError, GetVehicleInspectionUseCase,
    GetVehicleUseCase, InspectionUpsertInput, ListVehiclesError, ListVehiclesUseCase,
    LookupCarNumberError, LookupCarNumberUseCase, UpsertInspectionError, UpsertInspectionUseCase,
    UpsertVehicleError, UpsertVehicleUseCase, VehicleUpsertInput,
};

fn stub_session(user: User) -> AuthSession {
    AuthSession {
        access_token: "stub-access-token".to_string(),
        refresh_token: "stub-refresh-token".to_string(),
        expires_in: 900,
        user,
    }
}

// ============================================================================
// Auth
// ============================================================================

#[derive(Clone)]
pub struct StubLoginUserUseCase {
    result: Result<AuthSession, LoginError>,
}

impl StubLoginUserUseCase {
    pub fn success() -> Self {
        Self {
            result: Ok(stub_session(test_user(42))),
        }
    }

    pub fn error(error: LoginError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<AuthSession, LoginError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubRefreshTokenUseCase {
    result: Result<AuthSession, RefreshTokenError>,
}

impl StubRefreshTokenUseCase {
    pub fn success() -> Self {
        Self {
            result: Ok(stub_session(test_user(42))),
        }
    }

    pub fn error(error: RefreshTokenError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl IRefreshTokenUseCase for StubRefreshTokenUseCase {
    async fn execute(
        &self,
        _request: RefreshTokenRequest,
    ) -> Result<AuthSession, RefreshTokenError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubVerifyEmailUseCase {
    result: Result<UserId, VerifyEmailError>,
}

impl StubVerifyEmailUseCase {
    pub fn success() -> Self {
        Self {
            result: Ok(UserId::from(42)),
        }
    }

    pub fn error(error: VerifyEmailError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl IVerifyEmailUseCase for StubVerifyEmailUseCase {
    async fn execute(&self, _token: &str) -> Result<UserId, VerifyEmailError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubResendVerificationUseCase {
    result: Result<(), ResendVerificationError>,
}

impl StubResendVerificationUseCase {
    pub fn success() -> Self {
        Self { result: Ok(()) }
    }

    pub fn error(error: ResendVerificationError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl IResendVerificationUseCase for StubResendVerificationUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<(), ResendVerificationError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetCurrentUserUseCase {
    result: Result<User, GetCurrentUserError>,
}

impl StubGetCurrentUserUseCase {
    pub fn success() -> Self {
        Self {
            result: Ok(test_user(42)),
        }
    }

    pub fn error(error: GetCurrentUserError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl IGetCurrentUserUseCase for StubGetCurrentUserUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<User, GetCurrentUserError> {
        self.result.clone()
    }
}

/// Wrapped into a real `UserRegistrationOrchestrator` by the app state builder.
#[derive(Clone)]
pub struct StubRegisterUserUseCase {
    result: Result<User, RegisterUserError>,
}

impl StubRegisterUserUseCase {
    pub fn success() -> Self {
        Self {
            result: Ok(test_user(42)),
        }
    }

    pub fn error(error: RegisterUserError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(&self, _input: RegisterUserInput) -> Result<User, RegisterUserError> {
        self.result.clone()
    }
}

/// Accepts verification tokens; nothing else is reachable from handler tests.
#[derive(Default, Clone)]
pub struct StubUserRepository;

#[async_trait]
impl UserRepository for StubUserRepository {
    async fn create_user(&self, _user: NewUser) -> Result<User, UserRepositoryError> {
        unimplemented!("Not used in this test")
    }

    async fn store_verification_token(
        &self,
        _user_id: UserId,
        _token_hash: String,
        _expires_at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError> {
        Ok(())
    }

    async fn consume_verification_token(
        &self,
        _token_hash: &str,
    ) -> Result<Option<UserId>, UserRepositoryError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUserEmailNotifier;

#[async_trait]
impl UserEmailNotifier for StubUserEmailNotifier {
    async fn send_verification_email(
        &self,
        _recipient: VerificationRecipient,
    ) -> Result<(), UserEmailNotificationError> {
        Ok(())
    }
}

// ============================================================================
// Vehicles
// ============================================================================

/// Records the parsed query so handler tests can assert on it.
#[derive(Clone)]
pub struct StubListVehiclesUseCase {
    result: Result<Vec<Vehicle>, ListVehiclesError>,
    last_call: Arc<Mutex<Option<(VehicleListFilter, VehicleSort, PageRequest)>>>,
}

impl StubListVehiclesUseCase {
    pub fn success() -> Self {
        Self {
            result: Ok(vec![sample_vehicle(1), sample_vehicle(2)]),
            last_call: Arc::default(),
        }
    }

    pub fn error(error: ListVehiclesError) -> Self {
        Self {
            result: Err(error),
            last_call: Arc::default(),
        }
    }

    pub fn last_call(&self) -> Option<(VehicleListFilter, VehicleSort, PageRequest)> {
        self.last_call.lock().unwrap().clone()
    }
}

#[async_trait]
impl ListVehiclesUseCase for StubListVehiclesUseCase {
    async fn execute(
        &self,
        filter: VehicleListFilter,
        sort: VehicleSort,
        page: PageRequest,
    ) -> Result<PageResult<Vehicle>, ListVehiclesError> {
        *self.last_call.lock().unwrap() = Some((filter, sort, page));
        let items = self.result.clone()?;
        let total = items.len() as u64;
        Ok(PageResult::new(items, page, total))
    }
}

#[derive(Clone)]
pub struct StubGetVehicleUseCase {
    error: Option<GetVehicleError>,
}

impl StubGetVehicleUseCase {
    pub fn success() -> Self {
        Self { error: None }
    }

    pub fn error(error: GetVehicleError) -> Self {
        Self { error: Some(error) }
    }
}

#[async_trait]
impl GetVehicleUseCase for StubGetVehicleUseCase {
    async fn execute(&self, id: i64) -> Result<Vehicle, GetVehicleError> {
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(sample_vehicle(id)),
        }
    }
}

#[derive(Clone)]
pub struct StubGetVehicleHistoryUseCase {
    error: Option<GetVehicleHistoryError>,
}

impl StubGetVehicleHistoryUseCase {
    pub fn success() -> Self {
        Self { error: None }
    }

    pub fn error(error: GetVehicleHistoryError) -> Self {
        Self { error: Some(error) }
    }
}

#[async_trait]
impl GetVehicleHistoryUseCase for StubGetVehicleHistoryUseCase {
    async fn execute(
        &self,
        vehicle_id: i64,
    ) -> Result<Vec<AuctionHistoryEntry>, GetVehicleHistoryError> {
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(sample_history(vehicle_id)),
        }
    }
}

#[derive(Clone)]
pub struct StubGetVehicleInspectionUseCase {
    error: Option<GetVehicleInspectionError>,
}

impl StubGetVehicleInspectionUseCase {
    pub fn success() -> Self {
        Self { error: None }
    }

    pub fn error(error: GetVehicleInspectionError) -> Self {
        Self { error: Some(error) }
    }
}

#[async_trait]
impl GetVehicleInspectionUseCase for StubGetVehicleInspectionUseCase {
    async fn execute(
        &self,
        vehicle_id: i64,
    ) -> Result<VehicleInspection, GetVehicleInspectionError> {
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(sample_inspection(vehicle_id)),
        }
    }
}

#[derive(Clone)]
pub struct StubLookupCarNumberUseCase {
    error: Option<LookupCarNumberError>,
}

impl StubLookupCarNumberUseCase {
    pub fn success() -> Self {
        Self { error: None }
    }

    pub fn error(error: LookupCarNumberError) -> Self {
        Self { error: Some(error) }
    }
}

#[async_trait]
impl LookupCarNumberUseCase for StubLookupCarNumberUseCase {
    async fn execute(&self, car_number: &str) -> Result<CarNumberLookup, LookupCarNumberError> {
        if let Some(e) = &self.error {
            return Err(e.clone());
        }
        Ok(CarNumberLookup {
            vehicles: vec![sample_vehicle(1)],
            external_info: None,
            car365_url: car365_url(car_number.trim()),
        })
    }
}

#[derive(Clone)]
pub struct StubUpsertVehicleUseCase {
    result: Result<Vehicle, UpsertVehicleError>,
}

impl StubUpsertVehicleUseCase {
    pub fn success() -> Self {
        Self {
            result: Ok(sample_vehicle(1)),
        }
    }

    pub fn error(error: UpsertVehicleError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl UpsertVehicleUseCase for StubUpsertVehicleUseCase {
    async fn execute(&self, _input: VehicleUpsertInput) -> Result<Vehicle, UpsertVehicleError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubUpsertInspectionUseCase {
    result: Result<VehicleInspection, UpsertInspectionError>,
}

impl StubUpsertInspectionUseCase {
    pub fn success() -> Self {
        Self {
            result: Ok(sample_inspection(1)),
        }
    }

    pub fn error(error: UpsertInspectionError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl UpsertInspectionUseCase for StubUpsertInspectionUseCase {
    async fn execute(
        &self,
        _input: InspectionUpsertInput,
    ) -> Result<VehicleInspection, UpsertInspectionError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetStatsUseCase {
    result: Result<VehicleStats, GetStatsError>,
}

impl StubGetStatsUseCase {
    pub fn success() -> Self {
        Self {
            result: Ok(VehicleStats {
                total_count: 4,
                avg_price: 9_000_000.0,
                price_range: PriceRange {
                    min: 6_000_000,
                    max: 12_000_000,
                },
                completed_count: 2,
                avg_final_price: 8_500_000.0,
                sale_rate: 50.0,
                ..Default::default()
            }),
        }
    }

    pub fn error(error: GetStatsError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl GetStatsUseCase for StubGetStatsUseCase {
    async fn execute(&self) -> Result<VehicleStats, GetStatsError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetSourcesUseCase {
    result: Result<Vec<SourceInfo>, GetSourcesError>,
}

impl StubGetSourcesUseCase {
    pub fn success() -> Self {
        Self {
            result: Ok(vec![SourceInfo::from(SourceCount {
                source: "automart".to_string(),
                count: 3,
            })]),
        }
    }

    pub fn error(error: GetSourcesError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl GetSourcesUseCase for StubGetSourcesUseCase {
    async fn execute(&self) -> Result<Vec<SourceInfo>, GetSourcesError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetMarketMappingsUseCase {
    result: Result<MarketMappings, GetMarketMappingsError>,
}

impl StubGetMarketMappingsUseCase {
    pub fn success() -> Self {
        Self {
            result: Ok(MarketMappings {
                manufacturers: vec![ManufacturerMapping {
                    id: 1,
                    internal_name: "hyundai".to_string(),
                    korean_name: "현대".to_string(),
                    is_foreign: false,
                    kcar_code: None,
                    encar_name: Some("현대".to_string()),
                }],
                ..Default::default()
            }),
        }
    }

    pub fn error(error: GetMarketMappingsError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl GetMarketMappingsUseCase for StubGetMarketMappingsUseCase {
    async fn execute(&self) -> Result<MarketMappings, GetMarketMappingsError> {
        self.result.clone()
    }
}

// ============================================================================
// Favorites
// ============================================================================

#[derive(Clone)]
pub struct StubAddFavoriteUseCase {
    result: Result<(), AddFavoriteError>,
}

impl StubAddFavoriteUseCase {
    pub fn success() -> Self {
        Self { result: Ok(()) }
    }

    pub fn error(error: AddFavoriteError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl AddFavoriteUseCase for StubAddFavoriteUseCase {
    async fn execute(&self, _user_id: UserId, _vehicle_id: i64) -> Result<(), AddFavoriteError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubRemoveFavoriteUseCase {
    result: Result<(), RemoveFavoriteError>,
}

impl StubRemoveFavoriteUseCase {
    pub fn success() -> Self {
        Self { result: Ok(()) }
    }

    pub fn error(error: RemoveFavoriteError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl RemoveFavoriteUseCase for StubRemoveFavoriteUseCase {
    async fn execute(
        &self,
        _user_id: UserId,
        _vehicle_id: i64,
    ) -> Result<(), RemoveFavoriteError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubListFavoritesUseCase {
    result: Result<Vec<Vehicle>, ListFavoritesError>,
}

impl StubListFavoritesUseCase {
    pub fn success() -> Self {
        Self {
            result: Ok(vec![sample_vehicle(1)]),
        }
    }

    pub fn error(error: ListFavoritesError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl ListFavoritesUseCase for StubListFavoritesUseCase {
    async fn execute(
        &self,
        _user_id: UserId,
        page: PageRequest,
    ) -> Result<PageResult<Vehicle>, ListFavoritesError> {
        let items = self.result.clone()?;
        let total = items.len() as u64;
        Ok(PageResult::new(items, page, total))
    }
}

/// Answers every requested id, true only for the configured ones.
#[derive(Clone)]
pub struct StubCheckFavoritesUseCase {
    result: Result<Vec<i64>, CheckFavoritesError>,
}

impl StubCheckFavoritesUseCase {
    pub fn favorited(ids: Vec<i64>) -> Self {
        Self { result: Ok(ids) }
    }

    pub fn error(error: CheckFavoritesError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl CheckFavoritesUseCase for StubCheckFavoritesUseCase {
    async fn execute(
        &self,
        _user_id: UserId,
        vehicle_ids: Vec<i64>,
    ) -> Result<BTreeMap<i64, bool>, CheckFavoritesError> {
        let favorited = self.result.clone()?;
        Ok(vehicle_ids
            .into_iter()
            .map(|id| (id, favorited.contains(&id)))
            .collect())
    }
}
