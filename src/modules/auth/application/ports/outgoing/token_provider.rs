use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

use crate::auth::application::domain::entities::{User, UserId};

pub const ACCESS_TOKEN_TYPE: &str = "access";
pub const REFRESH_TOKEN_TYPE: &str = "refresh";

#[derive(Debug)]
pub enum TokenError {
    TokenExpired,
    TokenNotYetValid,
    InvalidTokenType(String),
    InvalidSignature,
    MalformedToken,
    EncodingError(String),
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::TokenExpired => write!(f, "Token has expired"),
            TokenError::TokenNotYetValid => write!(f, "Token is not yet valid"),
            TokenError::InvalidTokenType(expected) => {
                write!(f, "Invalid token type, expected: {}", expected)
            }
            TokenError::InvalidSignature => write!(f, "Invalid token signature"),
            TokenError::MalformedToken => write!(f, "Malformed token"),
            TokenError::EncodingError(msg) => write!(f, "Token encoding error: {}", msg),
        }
    }
}
impl Error for TokenError {}

/// JWT claims shared by access and refresh tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String, // decimal user id
    pub email: String,
    pub name: String,
    pub email_verified: bool,
    pub token_type: String,
    pub iss: String,
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
}

impl TokenClaims {
    /// Decodes `sub` back into the numeric user id.
    pub fn user_id(&self) -> Result<UserId, TokenError> {
        self.sub
            .parse::<i64>()
            .map(UserId::from)
            .map_err(|_| TokenError::MalformedToken)
    }
}

pub trait TokenProvider: Send + Sync {
    fn generate_access_token(&self, user: &User) -> Result<String, TokenError>;
    fn generate_refresh_token(&self, user: &User) -> Result<String, TokenError>;
    /// Checks signature, expiry and that the token is an access token.
    fn verify_access_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
    /// Checks signature, expiry and that the token is a refresh token.
    fn verify_refresh_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
    /// Access token lifetime in seconds.
    fn access_token_expiry(&self) -> i64;
}
