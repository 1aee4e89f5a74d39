use std::sync::Arc;

use async_trait::async_trait;
use email_address::EmailAddress;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::{NewUser, User};
use crate::auth::application::ports::outgoing::{
    PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MIN_NAME_LENGTH: usize = 2;
pub const MAX_NAME_LENGTH: usize = 100;

// ========================= Register Input =========================
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegisterUserInput {
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "correct-horse-battery")]
    pub password: String,
    #[schema(example = "Jane Doe")]
    pub name: String,
}

/// Input after trimming, lowercasing and rule checks.
#[derive(Debug, Clone, PartialEq)]
struct ValidRegistration {
    email: String,
    password: String,
    name: String,
}

impl RegisterUserInput {
    fn validate(self) -> Result<ValidRegistration, RegisterUserError> {
        let email = self.email.trim().to_lowercase();
        if email.is_empty() || !EmailAddress::is_valid(&email) {
            return Err(RegisterUserError::InvalidEmail);
        }

        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(RegisterUserError::InvalidPassword);
        }

        let name = self.name.trim().to_string();
        let name_len = name.chars().count();
        if !(MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&name_len) {
            return Err(RegisterUserError::InvalidName);
        }

        Ok(ValidRegistration {
            email,
            password: self.password,
            name,
        })
    }
}

// ====================== Register Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password must be at least 8 characters")]
    InvalidPassword,

    #[error("Name must be between 2 and 100 characters")]
    InvalidName,

    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<UserRepositoryError> for RegisterUserError {
    fn from(error: UserRepositoryError) -> Self {
        match error {
            UserRepositoryError::UserAlreadyExists => RegisterUserError::EmailAlreadyExists,
            UserRepositoryError::DatabaseError(msg) => RegisterUserError::RepositoryError(msg),
        }
    }
}

// ============================ Register User Use Case =============================
#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, input: RegisterUserInput) -> Result<User, RegisterUserError>;
}

#[derive(Clone)]
pub struct RegisterUserUseCase {
    query: Arc<dyn UserQuery + Send + Sync>,
    repository: Arc<dyn UserRepository + Send + Sync>,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl RegisterUserUseCase {
    pub fn new(
        query: Arc<dyn UserQuery + Send + Sync>,
        repository: Arc<dyn UserRepository + Send + Sync>,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl IRegisterUserUseCase for RegisterUserUseCase {
    async fn execute(&self, input: RegisterUserInput) -> Result<User, RegisterUserError> {
        let valid = input.validate()?;

        let existing = self
            .query
            .find_by_email(&valid.email)
            .await
            .map_err(|e| RegisterUserError::QueryError(e.to_string()))?;
        if existing.is_some() {
            return Err(RegisterUserError::EmailAlreadyExists);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&valid.password)
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        // The unique index still guards against a concurrent insert
        let user = self
            .repository
            .create_user(NewUser {
                email: valid.email,
                password_hash,
                name: valid.name,
            })
            .await?;

        Ok(user)
    }
}
