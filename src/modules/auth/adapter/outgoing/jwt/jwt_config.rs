use crate::shared::config::{optional, parsed_or, ConfigError, ConfigSource};

const DEV_ACCESS_SECRET: &str = "dev-access-secret-change-me-0123456789abcdef";
const DEV_REFRESH_SECRET: &str = "dev-refresh-secret-change-me-0123456789abcdef";

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub access_secret: String,
    pub refresh_secret: String,
    pub issuer: String,
    pub access_token_expiry: i64,  // Expiration in seconds
    pub refresh_token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    /// Reads `JWT_*` settings. Secrets are mandatory in production; elsewhere
    /// a development default is used and a warning is logged.
    pub fn from_source(source: &dyn ConfigSource, production: bool) -> Result<Self, ConfigError> {
        let access_secret = Self::secret(source, "JWT_SECRET", DEV_ACCESS_SECRET, production)?;
        let refresh_secret =
            Self::secret(source, "JWT_REFRESH_SECRET", DEV_REFRESH_SECRET, production)?;

        let access_mins: i64 = parsed_or(source, "JWT_ACCESS_EXPIRY_MINS", 15)?;
        let refresh_days: i64 = parsed_or(source, "JWT_REFRESH_EXPIRY_DAYS", 7)?;

        if access_mins <= 0 {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY_MINS",
                reason: "must be positive".to_string(),
            });
        }
        if refresh_days <= 0 {
            return Err(ConfigError::Invalid {
                key: "JWT_REFRESH_EXPIRY_DAYS",
                reason: "must be positive".to_string(),
            });
        }

        Ok(Self {
            access_secret,
            refresh_secret,
            issuer: optional(source, "JWT_ISSUER").unwrap_or_else(|| "auto-auction".to_string()),
            access_token_expiry: access_mins * 60,
            refresh_token_expiry: refresh_days * 24 * 60 * 60,
        })
    }

    fn secret(
        source: &dyn ConfigSource,
        key: &'static str,
        dev_default: &str,
        production: bool,
    ) -> Result<String, ConfigError> {
        match optional(source, key) {
            Some(secret) => {
                // HS256 wants at least 32 bytes of key material
                if production && secret.len() < 32 {
                    return Err(ConfigError::Invalid {
                        key,
                        reason: "must be at least 32 characters".to_string(),
                    });
                }
                Ok(secret)
            }
            None if production => Err(ConfigError::Missing(key)),
            None => {
                tracing::warn!("{} not set, using an insecure development default", key);
                Ok(dev_default.to_string())
            }
        }
    }
}
