use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::application::domain::entities::{AuthSession, PublicUser};

/// Body returned by login and refresh.
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    /// Access token lifetime in seconds
    #[schema(example = 900)]
    pub expires_in: i64,
    pub user: PublicUser,
}

impl From<&AuthSession> for SessionResponse {
    fn from(session: &AuthSession) -> Self {
        Self {
            access_token: session.access_token.clone(),
            expires_in: session.expires_in,
            user: PublicUser::from(&session.user),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub email_verification_sent: bool,
    #[schema(example = "jane@example.com")]
    pub email: String,
    pub user: PublicUser,
    pub access_token: String,
    #[schema(example = 900)]
    pub expires_in: i64,
}

/// Login body as sent by clients; validated into `LoginRequest`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "correct-horse-battery")]
    pub password: String,
}

/// Optional body for `/api/auth/refresh` when the cookie is unavailable.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct RefreshTokenBody {
    pub refresh_token: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct VerifyEmailQuery {
    /// Raw token from the verification link
    pub token: Option<String>,
}
