use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::dto::{
    LoginRequestDto, RefreshTokenBody, RegisterResponse, SessionResponse,
};
use crate::auth::application::domain::entities::PublicUser;
use crate::auth::application::use_cases::register_user::RegisterUserInput;
use crate::favorites::adapter::incoming::web::dto::{
    CheckFavoritesRequest, CheckFavoritesResponse, FavoriteStatusResponse,
};
use crate::shared::api::MessageResponse;
use crate::shared::pagination::Pagination;
use crate::vehicle::application::domain::entities::{
    AuctionHistoryEntry, CarNumberLookup, Vehicle, VehicleExternalInfo, VehicleInspection,
};
use crate::vehicle::application::domain::market_mapping::{
    FuelMapping, ManufacturerMapping, MarketMappings, ModelMapping,
};
use crate::vehicle::application::domain::stats::{
    FuelTypeStats, PriceRange, SourceInfo, SourceStats, StatusStats, VehicleStats,
};
use crate::vehicle::application::ports::incoming::use_cases::{
    InspectionUpsertInput, VehicleUpsertInput,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Auto Auction API",
        version = "1.0.0",
        description = "Public-auction vehicle listings, ingestion, accounts and favorites",
    ),
    paths(
        // Vehicles
        crate::vehicle::adapter::incoming::web::routes::list_vehicles_handler,
        crate::vehicle::adapter::incoming::web::routes::lookup_car_number_handler,
        crate::vehicle::adapter::incoming::web::routes::get_vehicle_handler,
        crate::vehicle::adapter::incoming::web::routes::get_vehicle_history_handler,
        crate::vehicle::adapter::incoming::web::routes::get_vehicle_inspection_handler,
        crate::vehicle::adapter::incoming::web::routes::get_stats_handler,
        crate::vehicle::adapter::incoming::web::routes::get_sources_handler,
        crate::vehicle::adapter::incoming::web::routes::get_market_mappings_handler,

        // Ingestion
        crate::vehicle::adapter::incoming::web::routes::upsert_vehicle_handler,
        crate::vehicle::adapter::incoming::web::routes::upsert_inspection_handler,

        // Auth
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::logout_user_handler,
        crate::auth::adapter::incoming::web::routes::refresh_token_handler,
        crate::auth::adapter::incoming::web::routes::verify_email_handler,
        crate::auth::adapter::incoming::web::routes::get_current_user_handler,
        crate::auth::adapter::incoming::web::routes::resend_verification_handler,

        // Favorites
        crate::favorites::adapter::incoming::web::routes::list_favorites_handler,
        crate::favorites::adapter::incoming::web::routes::check_favorites_handler,
        crate::favorites::adapter::incoming::web::routes::check_favorite_handler,
        crate::favorites::adapter::incoming::web::routes::add_favorite_handler,
        crate::favorites::adapter::incoming::web::routes::remove_favorite_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            Pagination,
            MessageResponse,

            Vehicle,
            AuctionHistoryEntry,
            VehicleInspection,
            VehicleExternalInfo,
            CarNumberLookup,
            VehicleStats,
            PriceRange,
            FuelTypeStats,
            StatusStats,
            SourceStats,
            SourceInfo,
            MarketMappings,
            ManufacturerMapping,
            FuelMapping,
            ModelMapping,
            VehicleUpsertInput,
            InspectionUpsertInput,

            RegisterUserInput,
            RegisterResponse,
            LoginRequestDto,
            SessionResponse,
            RefreshTokenBody,
            PublicUser,

            CheckFavoritesRequest,
            CheckFavoritesResponse,
            FavoriteStatusResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "vehicles", description = "Listing search and vehicle details"),
        (name = "ingestion", description = "Crawler write endpoints"),
        (name = "auth", description = "Accounts and sessions"),
        (name = "favorites", description = "Per-user saved vehicles"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from login, register or refresh"))
                        .build(),
                ),
            )
        }
    }
}
