use std::collections::HashMap;
use std::str::FromStr;

use crate::auth::adapter::incoming::web::cookies::CookieSettings;
use crate::auth::adapter::outgoing::jwt::JwtConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Source of raw configuration values. Production reads the process
/// environment; tests pass a map.
pub trait ConfigSource {
    fn get(&self, key: &str) -> Option<String>;
}

pub struct ProcessEnv;

impl ConfigSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl ConfigSource for HashMap<&str, &str> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).map(|v| v.to_string())
    }
}

/// Returns the value for `key`, treating blank values as unset.
pub fn optional(source: &dyn ConfigSource, key: &str) -> Option<String> {
    source
        .get(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn required(source: &dyn ConfigSource, key: &'static str) -> Result<String, ConfigError> {
    optional(source, key).ok_or(ConfigError::Missing(key))
}

pub fn parsed_or<T>(source: &dyn ConfigSource, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional(source, key) {
        Some(raw) => raw.parse::<T>().map_err(|e| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Immutable process configuration, loaded once in `main`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub database: DatabaseSettings,
    pub jwt: JwtConfig,
    pub cookies: CookieSettings,
    /// `None` unless both `SMTP_HOST` and `SMTP_USER` are present.
    pub smtp: Option<SmtpSettings>,
    pub smtp_from: String,
    pub app_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(&ProcessEnv)
    }

    pub fn from_source(source: &dyn ConfigSource) -> Result<Self, ConfigError> {
        let environment =
            optional(source, "RUST_ENV").unwrap_or_else(|| "development".to_string());
        let production = environment == "production";

        let database = DatabaseSettings {
            url: required(source, "DATABASE_URL")?,
            max_connections: parsed_or(source, "DB_MAX_CONNECTIONS", 20)?,
            min_connections: parsed_or(source, "DB_MIN_CONNECTIONS", 2)?,
        };

        let jwt = JwtConfig::from_source(source, production)?;

        let cookies = CookieSettings {
            secure: parsed_or(source, "COOKIE_SECURE", false)?,
            domain: optional(source, "COOKIE_DOMAIN"),
            access_max_age_secs: jwt.access_token_expiry,
            refresh_max_age_secs: jwt.refresh_token_expiry,
        };

        let smtp = match (optional(source, "SMTP_HOST"), optional(source, "SMTP_USER")) {
            (Some(host), Some(username)) => Some(SmtpSettings {
                host,
                port: parsed_or(source, "SMTP_PORT", 587)?,
                username,
                password: optional(source, "SMTP_PASSWORD").unwrap_or_default(),
            }),
            _ => None,
        };

        Ok(Self {
            host: optional(source, "HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parsed_or(source, "PORT", 8080)?,
            database,
            jwt,
            cookies,
            smtp,
            smtp_from: optional(source, "SMTP_FROM")
                .unwrap_or_else(|| "noreply@localhost".to_string()),
            app_base_url: optional(source, "APP_BASE_URL")
                .unwrap_or_else(|| "http://localhost:3000".to_string()),
            environment,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
