use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::UserRepository;
use crate::auth::application::services::verification_token::hash_token;

#[derive(Debug, Clone, thiserror::Error)]
pub enum VerifyEmailError {
    #[error("token required")]
    TokenRequired,

    #[error("invalid or expired token")]
    InvalidOrExpiredToken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IVerifyEmailUseCase: Send + Sync {
    /// Consumes the raw emailed token and marks its owner verified.
    async fn execute(&self, token: &str) -> Result<UserId, VerifyEmailError>;
}

#[derive(Clone)]
pub struct VerifyEmailUseCase {
    repository: Arc<dyn UserRepository + Send + Sync>,
}

impl VerifyEmailUseCase {
    pub fn new(repository: Arc<dyn UserRepository + Send + Sync>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl IVerifyEmailUseCase for VerifyEmailUseCase {
    async fn execute(&self, token: &str) -> Result<UserId, VerifyEmailError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(VerifyEmailError::TokenRequired);
        }

        self.repository
            .consume_verification_token(&hash_token(token))
            .await
            .map_err(|e| VerifyEmailError::RepositoryError(e.to_string()))?
            .ok_or(VerifyEmailError::InvalidOrExpiredToken)
    }
}
