use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::UserQuery;
use crate::auth::application::services::VerificationDispatcher;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResendVerificationError {
    #[error("user not found")]
    UserNotFound,

    #[error("email already verified")]
    AlreadyVerified,

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IResendVerificationUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<(), ResendVerificationError>;
}

/// Issues a fresh verification token for a signed-in, unverified user.
/// Earlier tokens stay valid until they expire or are used.
#[derive(Clone)]
pub struct ResendVerificationUseCase {
    query: Arc<dyn UserQuery + Send + Sync>,
    dispatcher: VerificationDispatcher,
}

impl ResendVerificationUseCase {
    pub fn new(query: Arc<dyn UserQuery + Send + Sync>, dispatcher: VerificationDispatcher) -> Self {
        Self { query, dispatcher }
    }
}

#[async_trait]
impl IResendVerificationUseCase for ResendVerificationUseCase {
    async fn execute(&self, user_id: UserId) -> Result<(), ResendVerificationError> {
        let user = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(|e| ResendVerificationError::QueryError(e.to_string()))?
            .ok_or(ResendVerificationError::UserNotFound)?;

        if user.email_verified {
            return Err(ResendVerificationError::AlreadyVerified);
        }

        self.dispatcher
            .issue(&user)
            .await
            .map_err(|e| ResendVerificationError::RepositoryError(e.to_string()))
    }
}
