use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::auth::application::domain::entities::AuthSession;
use crate::auth::application::ports::outgoing::token_provider::{TokenError, TokenProvider};
use crate::auth::application::ports::outgoing::UserQuery;
use crate::auth::application::services::issue_session;

// ========================= Refresh Token Request =========================
/// A refresh token taken from the cookie or the request body.
#[derive(Debug, Clone)]
pub struct RefreshTokenRequest {
    refresh_token: String, // Private - guaranteed non-empty
}

#[derive(Debug, Clone)]
pub enum RefreshTokenRequestError {
    EmptyToken,
}

impl std::fmt::Display for RefreshTokenRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefreshTokenRequestError::EmptyToken => write!(f, "Refresh token cannot be empty"),
        }
    }
}

impl std::error::Error for RefreshTokenRequestError {}

impl RefreshTokenRequest {
    pub fn new(refresh_token: String) -> Result<Self, RefreshTokenRequestError> {
        if refresh_token.trim().is_empty() {
            return Err(RefreshTokenRequestError::EmptyToken);
        }

        Ok(Self {
            refresh_token: refresh_token.trim().to_string(),
        })
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }
}

// ====================== Refresh Token Error =============================
#[derive(Debug, Clone)]
pub enum RefreshTokenError {
    /// Bad signature, expired, wrong type, malformed subject or unknown user.
    InvalidRefreshToken,
    TokenGenerationFailed(String),
    QueryError(String),
}

impl std::fmt::Display for RefreshTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefreshTokenError::InvalidRefreshToken => write!(f, "Invalid refresh token"),
            RefreshTokenError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            RefreshTokenError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for RefreshTokenError {}

impl From<TokenError> for RefreshTokenError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::EncodingError(msg) => RefreshTokenError::TokenGenerationFailed(msg),
            _ => RefreshTokenError::InvalidRefreshToken,
        }
    }
}

// ============================ Refresh Token Use Case =============================
#[async_trait]
pub trait IRefreshTokenUseCase: Send + Sync {
    async fn execute(&self, request: RefreshTokenRequest)
        -> Result<AuthSession, RefreshTokenError>;
}

/// Verifies a refresh token, reloads the user and rotates both tokens.
#[derive(Clone)]
pub struct RefreshTokenUseCase {
    query: Arc<dyn UserQuery + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl RefreshTokenUseCase {
    pub fn new(
        query: Arc<dyn UserQuery + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            token_provider,
        }
    }
}

#[async_trait]
impl IRefreshTokenUseCase for RefreshTokenUseCase {
    async fn execute(
        &self,
        request: RefreshTokenRequest,
    ) -> Result<AuthSession, RefreshTokenError> {
        let claims = self
            .token_provider
            .verify_refresh_token(request.refresh_token())?;
        let user_id = claims.user_id()?;

        let user = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(|e| RefreshTokenError::QueryError(e.to_string()))?
            .ok_or_else(|| {
                debug!(user_id = %user_id, "Refresh token subject no longer exists");
                RefreshTokenError::InvalidRefreshToken
            })?;

        Ok(issue_session(self.token_provider.as_ref(), user)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::auth::application::ports::outgoing::UserQueryError;
    use crate::tests::support::auth_helper::test_helpers::{
        access_token_for, create_test_jwt_service, refresh_token_for, test_user,
    };
    use crate::tests::support::port_mocks::MockUserQueryPort;

    fn use_case(query: MockUserQueryPort) -> RefreshTokenUseCase {
        RefreshTokenUseCase::new(Arc::new(query), Arc::new(create_test_jwt_service()))
    }

    // ==================== RefreshTokenRequest Tests ====================
    #[test]
    fn test_refresh_token_request_trimmed() {
        let request = RefreshTokenRequest::new("  token_123  ".to_string()).unwrap();
        assert_eq!(request.refresh_token(), "token_123");
    }

    #[test]
    fn test_refresh_token_request_whitespace_only() {
        let result = RefreshTokenRequest::new("   ".to_string());
        assert!(matches!(result, Err(RefreshTokenRequestError::EmptyToken)));
    }

    // ==================== RefreshTokenUseCase Tests ====================
    #[tokio::test]
    async fn test_refresh_token_success_loads_user_by_numeric_subject() {
        let token = refresh_token_for(&create_test_jwt_service(), 42);
        let mut query = MockUserQueryPort::new();
        query
            .expect_find_by_id()
            .withf(|id| *id == UserId::from(42))
            .times(1)
            .returning(|id| Ok(Some(test_user(id.value()))));

        let session = use_case(query)
            .execute(RefreshTokenRequest::new(token).unwrap())
            .await
            .unwrap();

        let tokens = create_test_jwt_service();
        let access = tokens.verify_access_token(&session.access_token).unwrap();
        let refresh = tokens.verify_refresh_token(&session.refresh_token).unwrap();
        assert_eq!(access.sub, "42");
        assert_eq!(refresh.sub, "42");
        assert_eq!(session.user.id, UserId::from(42));
    }

    #[tokio::test]
    async fn test_refresh_token_with_access_token_fails() {
        let token = access_token_for(&create_test_jwt_service(), 42);
        let mut query = MockUserQueryPort::new();
        query.expect_find_by_id().never();

        let result = use_case(query)
            .execute(RefreshTokenRequest::new(token).unwrap())
            .await;

        assert!(matches!(result, Err(RefreshTokenError::InvalidRefreshToken)));
    }

    #[tokio::test]
    async fn test_refresh_token_garbage_fails() {
        let result = use_case(MockUserQueryPort::new())
            .execute(RefreshTokenRequest::new("not.a.jwt".to_string()).unwrap())
            .await;

        assert!(matches!(result, Err(RefreshTokenError::InvalidRefreshToken)));
    }

    #[tokio::test]
    async fn test_refresh_token_unknown_user_fails() {
        let token = refresh_token_for(&create_test_jwt_service(), 42);
        let mut query = MockUserQueryPort::new();
        query.expect_find_by_id().returning(|_| Ok(None));

        let result = use_case(query)
            .execute(RefreshTokenRequest::new(token).unwrap())
            .await;

        assert!(matches!(result, Err(RefreshTokenError::InvalidRefreshToken)));
    }

    #[tokio::test]
    async fn test_refresh_token_query_error() {
        let token = refresh_token_for(&create_test_jwt_service(), 42);
        let mut query = MockUserQueryPort::new();
        query
            .expect_find_by_id()
            .returning(|_| Err(UserQueryError::DatabaseError("down".to_string())));

        let result = use_case(query)
            .execute(RefreshTokenRequest::new(token).unwrap())
            .await;

        assert!(matches!(result, Err(RefreshTokenError::QueryError(_))));
    }
}
