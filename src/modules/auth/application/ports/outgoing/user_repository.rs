use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt;

use crate::modules::auth::application::domain::entities::{NewUser, User, UserId};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError>;

    /// Stores the SHA-256 hash of a freshly issued verification token.
    async fn store_verification_token(
        &self,
        user_id: UserId,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError>;

    /// Marks the matching token used and the owning user verified, in one
    /// transaction. Returns `None` when the token is unknown, already used or
    /// expired; nothing is changed in that case.
    async fn consume_verification_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<UserId>, UserRepositoryError>;
}

#[derive(Debug, Clone)]
pub enum UserRepositoryError {
    UserAlreadyExists,
    DatabaseError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for UserRepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRepositoryError::UserAlreadyExists => write!(f, "User already exists"),
            UserRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for UserRepositoryError {}
