pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{auth, email, favorites, vehicle};

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::incoming::web::cookies::CookieSettings;
use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::adapter::outgoing::security::BcryptHasher;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::orchestrator::user_registration::UserRegistrationOrchestrator;
use crate::auth::application::ports::outgoing::{
    password_hasher::PasswordHasher, token_provider::TokenProvider, user_query::UserQuery,
    user_repository::UserRepository,
};
use crate::auth::application::services::VerificationDispatcher;
use crate::auth::application::use_cases::{
    get_current_user::GetCurrentUserUseCase, login_user::LoginUserUseCase,
    refresh_token::RefreshTokenUseCase, register_user::RegisterUserUseCase,
    resend_verification::ResendVerificationUseCase, verify_email::VerifyEmailUseCase,
};
use crate::auth::application::AuthUseCases;
use crate::email::adapter::outgoing::{LogOnlyEmailSender, SmtpEmailSender};
use crate::email::application::ports::outgoing::email_sender::EmailSender;
use crate::email::application::ports::outgoing::user_email_notifier::UserEmailNotifier;
use crate::email::application::services::UserEmailService;
use crate::favorites::adapter::outgoing::favorite_repository_postgres::FavoriteRepositoryPostgres;
use crate::favorites::application::service::{
    AddFavoriteService, CheckFavoritesService, ListFavoritesService, RemoveFavoriteService,
};
use crate::favorites::application::FavoriteUseCases;
use crate::shared::api::{custom_json_config, custom_query_config};
use crate::shared::config::AppConfig;
use crate::shared::cors::Cors;
use crate::vehicle::adapter::outgoing::vehicle_query_postgres::VehicleQueryPostgres;
use crate::vehicle::adapter::outgoing::vehicle_repository_postgres::VehicleRepositoryPostgres;
use crate::vehicle::application::service::{
    GetMarketMappingsService, GetSourcesService, GetStatsService, GetVehicleHistoryService,
    GetVehicleInspectionService, GetVehicleService, ListVehiclesService, LookupCarNumberService,
    UpsertInspectionService, UpsertVehicleService,
};
use crate::vehicle::application::VehicleUseCases;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub vehicle: VehicleUseCases,
    pub favorites: FavoriteUseCases,
    pub auth: AuthUseCases,
    pub register_user_orchestrator: Arc<UserRegistrationOrchestrator>,
    pub cookies: CookieSettings,
    /// Include raw error text in 500 bodies. Off in production.
    pub expose_error_details: bool,
}

fn vehicle_use_cases(db: &Arc<DatabaseConnection>) -> VehicleUseCases {
    let query = VehicleQueryPostgres::new(Arc::clone(db));
    let repository = VehicleRepositoryPostgres::new(Arc::clone(db));

    VehicleUseCases {
        list: Arc::new(ListVehiclesService::new(query.clone())),
        get_single: Arc::new(GetVehicleService::new(query.clone())),
        get_history: Arc::new(GetVehicleHistoryService::new(query.clone())),
        get_inspection: Arc::new(GetVehicleInspectionService::new(query.clone())),
        lookup: Arc::new(LookupCarNumberService::new(query.clone())),
        upsert: Arc::new(UpsertVehicleService::new(repository.clone())),
        upsert_inspection: Arc::new(UpsertInspectionService::new(repository)),
        stats: Arc::new(GetStatsService::new(query.clone())),
        sources: Arc::new(GetSourcesService::new(query.clone())),
        market_mappings: Arc::new(GetMarketMappingsService::new(query)),
    }
}

fn favorite_use_cases(db: &Arc<DatabaseConnection>) -> FavoriteUseCases {
    let repository = FavoriteRepositoryPostgres::new(Arc::clone(db));

    FavoriteUseCases {
        add: Arc::new(AddFavoriteService::new(repository.clone())),
        remove: Arc::new(RemoveFavoriteService::new(repository.clone())),
        list: Arc::new(ListFavoritesService::new(repository.clone())),
        check: Arc::new(CheckFavoritesService::new(repository)),
    }
}

fn email_sender(config: &AppConfig) -> anyhow::Result<Arc<dyn EmailSender + Send + Sync>> {
    match &config.smtp {
        Some(settings) => {
            let sender = SmtpEmailSender::new(settings, &config.smtp_from)
                .context("Failed to build SMTP transport")?;
            info!(host = %settings.host, port = settings.port, "SMTP email sender configured");
            Ok(Arc::new(sender))
        }
        None => {
            warn!("SMTP_HOST/SMTP_USER not set, verification emails will only be logged");
            Ok(Arc::new(LogOnlyEmailSender))
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    // .env.{environment} first, then .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    if dotenvy::from_filename(format!(".env.{env}")).is_err() {
        dotenvy::dotenv().ok();
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().context("Invalid configuration")?;
    info!(environment = %config.environment, "Starting application...");

    // Database connection
    let mut opt = ConnectOptions::new(config.database.url.clone());
    opt.max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let db_arc = Arc::new(
        Database::connect(opt)
            .await
            .context("Failed to connect to database")?,
    );
    info!("Database connection established");

    // Auth components
    let token_provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(config.jwt.clone()));
    let password_hasher: Arc<dyn PasswordHasher + Send + Sync> = Arc::new(BcryptHasher::new());
    let user_query: Arc<dyn UserQuery + Send + Sync> =
        Arc::new(UserQueryPostgres::new(Arc::clone(&db_arc)));
    let user_repo: Arc<dyn UserRepository + Send + Sync> =
        Arc::new(UserRepositoryPostgres::new(Arc::clone(&db_arc)));

    let notifier: Arc<dyn UserEmailNotifier + Send + Sync> = Arc::new(UserEmailService::new(
        email_sender(&config)?,
        &config.app_base_url,
    ));
    let verification = VerificationDispatcher::new(Arc::clone(&user_repo), notifier);

    let register_user_orchestrator = UserRegistrationOrchestrator::new(
        Arc::new(RegisterUserUseCase::new(
            Arc::clone(&user_query),
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
        )),
        verification.clone(),
        Arc::clone(&token_provider),
    );

    let auth = AuthUseCases {
        login: Arc::new(LoginUserUseCase::new(
            Arc::clone(&user_query),
            password_hasher,
            Arc::clone(&token_provider),
        )),
        refresh: Arc::new(RefreshTokenUseCase::new(
            Arc::clone(&user_query),
            Arc::clone(&token_provider),
        )),
        verify_email: Arc::new(VerifyEmailUseCase::new(user_repo)),
        resend_verification: Arc::new(ResendVerificationUseCase::new(
            Arc::clone(&user_query),
            verification,
        )),
        get_current_user: Arc::new(GetCurrentUserUseCase::new(user_query)),
    };

    let state = AppState {
        vehicle: vehicle_use_cases(&db_arc),
        favorites: favorite_use_cases(&db_arc),
        auth,
        register_user_orchestrator: Arc::new(register_user_orchestrator),
        cookies: config.cookies.clone(),
        expose_error_details: !config.is_production(),
    };

    let server_url = config.bind_address();
    info!(address = %server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .wrap(Cors)
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await?;

    Ok(())
}

/// Literal segments are registered ahead of the `{id}` patterns they would
/// otherwise be captured by.
#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);

    // Vehicles
    cfg.service(crate::vehicle::adapter::incoming::web::routes::list_vehicles_handler);
    cfg.service(crate::vehicle::adapter::incoming::web::routes::lookup_car_number_handler);
    cfg.service(crate::vehicle::adapter::incoming::web::routes::upsert_vehicle_handler);
    cfg.service(crate::vehicle::adapter::incoming::web::routes::upsert_inspection_handler);
    cfg.service(crate::vehicle::adapter::incoming::web::routes::get_vehicle_handler);
    cfg.service(crate::vehicle::adapter::incoming::web::routes::get_vehicle_history_handler);
    cfg.service(crate::vehicle::adapter::incoming::web::routes::get_vehicle_inspection_handler);
    cfg.service(crate::vehicle::adapter::incoming::web::routes::get_stats_handler);
    cfg.service(crate::vehicle::adapter::incoming::web::routes::get_sources_handler);
    cfg.service(crate::vehicle::adapter::incoming::web::routes::get_market_mappings_handler);

    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::refresh_token_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::verify_email_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::get_current_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::resend_verification_handler);

    // Favorites
    cfg.service(crate::favorites::adapter::incoming::web::routes::list_favorites_handler);
    cfg.service(crate::favorites::adapter::incoming::web::routes::check_favorites_handler);
    cfg.service(crate::favorites::adapter::incoming::web::routes::check_favorite_handler);
    cfg.service(crate::favorites::adapter::incoming::web::routes::add_favorite_handler);
    cfg.service(crate::favorites::adapter::incoming::web::routes::remove_favorite_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
