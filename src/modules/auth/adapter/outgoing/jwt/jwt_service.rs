use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use std::fmt;
use tracing;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider, ACCESS_TOKEN_TYPE, REFRESH_TOKEN_TYPE,
};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    access_encoding_key: EncodingKey,
    access_decoding_key: DecodingKey,
    refresh_encoding_key: EncodingKey,
    refresh_decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .field("keys", &"<redacted>")
            .finish()
    }
}

impl JwtTokenService {
    /// Initialize the service with config
    pub fn new(config: JwtConfig) -> Self {
        let access = config.access_secret.as_bytes();
        let refresh = config.refresh_secret.as_bytes();

        Self {
            access_encoding_key: EncodingKey::from_secret(access),
            access_decoding_key: DecodingKey::from_secret(access),
            refresh_encoding_key: EncodingKey::from_secret(refresh),
            refresh_decoding_key: DecodingKey::from_secret(refresh),
            config,
        }
    }

    fn generate_token(
        &self,
        user: &User,
        token_type: &str,
        expiry_seconds: i64,
        key: &EncodingKey,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(expiry_seconds);

        let claims = TokenClaims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
            email_verified: user.email_verified,
            token_type: token_type.to_string(),
            iss: self.config.issuer.clone(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }

    fn verify_token(
        &self,
        token: &str,
        key: &DecodingKey,
        expected_type: &str,
    ) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.set_issuer(&[self.config.issuer.as_str()]);

        let decoded = decode::<TokenClaims>(token, key, &validation).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;

            match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token verification failed: Token expired");
                    TokenError::TokenExpired
                }
                ErrorKind::ImmatureSignature => {
                    tracing::warn!("Token verification failed: Token not yet valid");
                    TokenError::TokenNotYetValid
                }
                ErrorKind::InvalidSignature => {
                    tracing::error!("Security alert: Invalid token signature detected");
                    TokenError::InvalidSignature
                }
                ErrorKind::InvalidToken | ErrorKind::InvalidAlgorithm => {
                    tracing::error!("Security alert: Malformed or invalid algorithm token");
                    TokenError::MalformedToken
                }
                ErrorKind::Base64(_) | ErrorKind::Json(_) | ErrorKind::Utf8(_) => {
                    tracing::warn!("Token verification failed: Malformed token");
                    TokenError::MalformedToken
                }
                _ => {
                    tracing::warn!("Token verification failed: {}", e);
                    TokenError::MalformedToken
                }
            }
        })?;

        let claims = decoded.claims;

        if claims.token_type != expected_type {
            tracing::warn!(
                "Token type mismatch: expected '{}', got '{}'",
                expected_type,
                claims.token_type
            );
            return Err(TokenError::InvalidTokenType(expected_type.to_string()));
        }

        // Subject must decode to a numeric id before the token is trusted
        claims.user_id()?;

        Ok(claims)
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(&self, user: &User) -> Result<String, TokenError> {
        self.generate_token(
            user,
            ACCESS_TOKEN_TYPE,
            self.config.access_token_expiry,
            &self.access_encoding_key,
        )
    }

    fn generate_refresh_token(&self, user: &User) -> Result<String, TokenError> {
        self.generate_token(
            user,
            REFRESH_TOKEN_TYPE,
            self.config.refresh_token_expiry,
            &self.refresh_encoding_key,
        )
    }

    fn verify_access_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        self.verify_token(token, &self.access_decoding_key, ACCESS_TOKEN_TYPE)
    }

    fn verify_refresh_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let claims = self.verify_token(token, &self.refresh_decoding_key, REFRESH_TOKEN_TYPE)?;
        tracing::debug!(user_id = %claims.sub, "Refresh token validated");
        Ok(claims)
    }

    fn access_token_expiry(&self) -> i64 {
        self.config.access_token_expiry
    }
}
