use actix_web::web;
use std::sync::Arc;

use crate::auth::adapter::incoming::web::cookies::CookieSettings;
use crate::auth::application::orchestrator::user_registration::UserRegistrationOrchestrator;
use crate::auth::application::services::VerificationDispatcher;
use crate::auth::application::use_cases::get_current_user::IGetCurrentUserUseCase;
use crate::auth::application::use_cases::login_user::ILoginUserUseCase;
use crate::auth::application::use_cases::refresh_token::IRefreshTokenUseCase;
use crate::auth::application::use_cases::register_user::IRegisterUserUseCase;
use crate::auth::application::use_cases::resend_verification::IResendVerificationUseCase;
use crate::auth::application::use_cases::verify_email::IVerifyEmailUseCase;
use crate::auth::application::AuthUseCases;
use crate::favorites::application::ports::incoming::use_cases::{
    AddFavoriteUseCase, CheckFavoritesUseCase, ListFavoritesUseCase, RemoveFavoriteUseCase,
};
use crate::favorites::application::FavoriteUseCases;
use crate::tests::support::auth_helper::test_helpers::create_test_jwt_service;
use crate::tests::support::stubs::*;
use crate::vehicle::application::ports::incoming::use_cases::{
    GetMarketMappingsUseCase, GetSourcesUseCase, GetStatsUseCase, GetVehicleHistoryUseCase,
    GetVehicleInspectionUseCase, GetVehicleUseCase, ListVehiclesUseCase, LookupCarNumberUseCase,
    UpsertInspectionUseCase, UpsertVehicleUseCase,
};
use crate::vehicle::application::VehicleUseCases;
use crate::AppState;

/// `AppState` for handler tests. Every use case starts as a succeeding stub;
/// override only what a test exercises.
pub struct TestAppStateBuilder {
    vehicle: VehicleUseCases,
    favorites: FavoriteUseCases,
    auth: AuthUseCases,
    register_user: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    cookies: CookieSettings,
    expose_error_details: bool,
}

pub fn test_cookie_settings() -> CookieSettings {
    CookieSettings {
        secure: false,
        domain: None,
        access_max_age_secs: 900,
        refresh_max_age_secs: 604800,
    }
}

fn registration_orchestrator(
    register_user: Arc<dyn IRegisterUserUseCase + Send + Sync>,
) -> Arc<UserRegistrationOrchestrator> {
    let verification = VerificationDispatcher::new(
        Arc::new(StubUserRepository),
        Arc::new(StubUserEmailNotifier),
    );

    Arc::new(UserRegistrationOrchestrator::new(
        register_user,
        verification,
        Arc::new(create_test_jwt_service()),
    ))
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            vehicle: VehicleUseCases {
                list: Arc::new(StubListVehiclesUseCase::success()),
                get_single: Arc::new(StubGetVehicleUseCase::success()),
                get_history: Arc::new(StubGetVehicleHistoryUseCase::success()),
                get_inspection: Arc::new(StubGetVehicleInspectionUseCase::success()),
                lookup: Arc::new(StubLookupCarNumberUseCase::success()),
                upsert: Arc::new(StubUpsertVehicleUseCase::success()),
                upsert_inspection: Arc::new(StubUpsertInspectionUseCase::success()),
                stats: Arc::new(StubGetStatsUseCase::success()),
                sources: Arc::new(StubGetSourcesUseCase::success()),
                market_mappings: Arc::new(StubGetMarketMappingsUseCase::success()),
            },
            favorites: FavoriteUseCases {
                add: Arc::new(StubAddFavoriteUseCase::success()),
                remove: Arc::new(StubRemoveFavoriteUseCase::success()),
                list: Arc::new(StubListFavoritesUseCase::success()),
                check: Arc::new(StubCheckFavoritesUseCase::favorited(vec![])),
            },
            auth: AuthUseCases {
                login: Arc::new(StubLoginUserUseCase::success()),
                refresh: Arc::new(StubRefreshTokenUseCase::success()),
                verify_email: Arc::new(StubVerifyEmailUseCase::success()),
                resend_verification: Arc::new(StubResendVerificationUseCase::success()),
                get_current_user: Arc::new(StubGetCurrentUserUseCase::success()),
            },
            register_user: Arc::new(StubRegisterUserUseCase::success()),
            cookies: test_cookie_settings(),
            expose_error_details: true,
        }
    }
}

impl TestAppStateBuilder {
    // ---- auth ----

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_refresh_token(
        mut self,
        uc: impl IRefreshTokenUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.refresh = Arc::new(uc);
        self
    }

    pub fn with_verify_email(mut self, uc: impl IVerifyEmailUseCase + Send + Sync + 'static) -> Self {
        self.auth.verify_email = Arc::new(uc);
        self
    }

    pub fn with_resend_verification(
        mut self,
        uc: impl IResendVerificationUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.resend_verification = Arc::new(uc);
        self
    }

    pub fn with_get_current_user(
        mut self,
        uc: impl IGetCurrentUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.get_current_user = Arc::new(uc);
        self
    }

    pub fn with_register_user(
        mut self,
        uc: impl IRegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_user = Arc::new(uc);
        self
    }

    // ---- vehicles ----

    pub fn with_list_vehicles(mut self, uc: impl ListVehiclesUseCase + 'static) -> Self {
        self.vehicle.list = Arc::new(uc);
        self
    }

    pub fn with_get_vehicle(mut self, uc: impl GetVehicleUseCase + 'static) -> Self {
        self.vehicle.get_single = Arc::new(uc);
        self
    }

    pub fn with_get_vehicle_history(mut self, uc: impl GetVehicleHistoryUseCase + 'static) -> Self {
        self.vehicle.get_history = Arc::new(uc);
        self
    }

    pub fn with_get_vehicle_inspection(
        mut self,
        uc: impl GetVehicleInspectionUseCase + 'static,
    ) -> Self {
        self.vehicle.get_inspection = Arc::new(uc);
        self
    }

    pub fn with_lookup_car_number(mut self, uc: impl LookupCarNumberUseCase + 'static) -> Self {
        self.vehicle.lookup = Arc::new(uc);
        self
    }

    pub fn with_upsert_vehicle(mut self, uc: impl UpsertVehicleUseCase + 'static) -> Self {
        self.vehicle.upsert = Arc::new(uc);
        self
    }

    pub fn with_upsert_inspection(mut self, uc: impl UpsertInspectionUseCase + 'static) -> Self {
        self.vehicle.upsert_inspection = Arc::new(uc);
        self
    }

    pub fn with_get_stats(mut self, uc: impl GetStatsUseCase + 'static) -> Self {
        self.vehicle.stats = Arc::new(uc);
        self
    }

    pub fn with_get_sources(mut self, uc: impl GetSourcesUseCase + 'static) -> Self {
        self.vehicle.sources = Arc::new(uc);
        self
    }

    pub fn with_get_market_mappings(mut self, uc: impl GetMarketMappingsUseCase + 'static) -> Self {
        self.vehicle.market_mappings = Arc::new(uc);
        self
    }

    // ---- favorites ----

    pub fn with_add_favorite(mut self, uc: impl AddFavoriteUseCase + 'static) -> Self {
        self.favorites.add = Arc::new(uc);
        self
    }

    pub fn with_remove_favorite(mut self, uc: impl RemoveFavoriteUseCase + 'static) -> Self {
        self.favorites.remove = Arc::new(uc);
        self
    }

    pub fn with_list_favorites(mut self, uc: impl ListFavoritesUseCase + 'static) -> Self {
        self.favorites.list = Arc::new(uc);
        self
    }

    pub fn with_check_favorites(mut self, uc: impl CheckFavoritesUseCase + 'static) -> Self {
        self.favorites.check = Arc::new(uc);
        self
    }

    // ---- settings ----

    pub fn with_expose_error_details(mut self, expose: bool) -> Self {
        self.expose_error_details = expose;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            vehicle: self.vehicle,
            favorites: self.favorites,
            auth: self.auth,
            register_user_orchestrator: registration_orchestrator(self.register_user),
            cookies: self.cookies,
            expose_error_details: self.expose_error_details,
        })
    }
}
