use std::sync::Arc;

use tracing::{info, warn};

use crate::auth::application::domain::entities::AuthSession;
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::auth::application::services::{issue_session, VerificationDispatcher};
use crate::auth::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterUserError, RegisterUserInput,
};

// ============================================================================
// Registration Output
// ============================================================================
#[derive(Debug)]
pub struct UserRegistrationOutput {
    pub session: AuthSession,
    /// True when a verification token was stored and the email queued.
    pub email_verification_sent: bool,
}

// ============================================================================
// Registration Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum UserRegistrationError {
    #[error("User creation failed: {0}")]
    RegisterUserFailed(#[from] RegisterUserError),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
}

// ============================================================================
// User Registration Service (Orchestration Layer)
// ============================================================================

#[derive(Clone)]
pub struct UserRegistrationOrchestrator {
    register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    verification: VerificationDispatcher,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl UserRegistrationOrchestrator {
    pub fn new(
        register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
        verification: VerificationDispatcher,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            register_user_use_case,
            verification,
            token_provider,
        }
    }

    /// Creates the account, queues the verification email and signs the
    /// user in. A verification failure does not fail registration.
    pub async fn register_user(
        &self,
        input: RegisterUserInput,
    ) -> Result<UserRegistrationOutput, UserRegistrationError> {
        let user = self.register_user_use_case.execute(input).await?;
        info!(user_id = %user.id, "User registered");

        let email_verification_sent = match self.verification.issue(&user).await {
            Ok(()) => true,
            Err(e) => {
                warn!(user_id = %user.id, error = %e, "Could not store verification token");
                false
            }
        };

        let session = issue_session(self.token_provider.as_ref(), user)
            .map_err(|e| UserRegistrationError::TokenGenerationFailed(e.to_string()))?;

        Ok(UserRegistrationOutput {
            session,
            email_verification_sent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::User;
    use crate::auth::application::ports::outgoing::UserRepositoryError;
    use crate::email::application::ports::outgoing::user_email_notifier::UserEmailNotificationError;
    use crate::tests::support::auth_helper::test_helpers::{create_test_jwt_service, test_user};
    use crate::tests::support::port_mocks::{MockEmailNotifierPort, MockUserRepositoryPort};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tokio::sync::Notify;

    // =====================================================
    // Mock RegisterUserUseCase
    // =====================================================

    #[derive(Clone)]
    struct MockRegisterUserUseCase {
        result: Result<User, RegisterUserError>,
    }

    #[async_trait]
    impl IRegisterUserUseCase for MockRegisterUserUseCase {
        async fn execute(&self, _input: RegisterUserInput) -> Result<User, RegisterUserError> {
            self.result.clone()
        }
    }

    fn valid_input() -> RegisterUserInput {
        RegisterUserInput {
            email: "jane@example.com".to_string(),
            password: "password123".to_string(),
            name: "Jane Doe".to_string(),
        }
    }

    fn orchestrator(
        result: Result<User, RegisterUserError>,
        repository: MockUserRepositoryPort,
        notifier: MockEmailNotifierPort,
    ) -> UserRegistrationOrchestrator {
        UserRegistrationOrchestrator::new(
            Arc::new(MockRegisterUserUseCase { result }),
            VerificationDispatcher::new(Arc::new(repository), Arc::new(notifier)),
            Arc::new(create_test_jwt_service()),
        )
    }

    // =====================================================
    // SUCCESS: user created + email sent
    // =====================================================

    #[tokio::test]
    async fn register_user_success() {
        let mut repository = MockUserRepositoryPort::new();
        repository
            .expect_store_verification_token()
            .times(1)
            .returning(|_, _, _| Ok(()));

        let called = Arc::new(AtomicBool::new(false));
        let notify = Arc::new(Notify::new());
        let mut notifier = MockEmailNotifierPort::new();
        {
            let called = called.clone();
            let notify = notify.clone();
            notifier
                .expect_send_verification_email()
                .returning(move |recipient| {
                    assert_eq!(recipient.email, "jane@example.com");
                    called.store(true, Ordering::SeqCst);
                    notify.notify_one();
                    Ok(())
                });
        }

        let output = orchestrator(Ok(test_user(1)), repository, notifier)
            .register_user(valid_input())
            .await
            .unwrap();

        assert!(output.email_verification_sent);
        assert_eq!(output.session.user.id.value(), 1);
        assert!(!output.session.access_token.is_empty());

        tokio::time::timeout(std::time::Duration::from_secs(1), notify.notified())
            .await
            .expect("Email should have been sent within 1 second");
        assert!(called.load(Ordering::SeqCst));
    }

    // =====================================================
    // SUCCESS: user created, email FAILED
    // =====================================================

    #[tokio::test]
    async fn register_user_succeeds_even_when_email_fails() {
        let mut repository = MockUserRepositoryPort::new();
        repository
            .expect_store_verification_token()
            .returning(|_, _, _| Ok(()));
        let mut notifier = MockEmailNotifierPort::new();
        notifier.expect_send_verification_email().returning(|_| {
            Err(UserEmailNotificationError::EmailSendingFailed(
                "SMTP down".to_string(),
            ))
        });

        let result = orchestrator(Ok(test_user(1)), repository, notifier)
            .register_user(valid_input())
            .await;

        assert!(result.is_ok());
        assert!(result.unwrap().email_verification_sent);
    }

    #[tokio::test]
    async fn token_storage_failure_is_reported_not_fatal() {
        let mut repository = MockUserRepositoryPort::new();
        repository
            .expect_store_verification_token()
            .returning(|_, _, _| Err(UserRepositoryError::DatabaseError("down".to_string())));
        let mut notifier = MockEmailNotifierPort::new();
        notifier.expect_send_verification_email().never();

        let output = orchestrator(Ok(test_user(1)), repository, notifier)
            .register_user(valid_input())
            .await
            .unwrap();

        assert!(!output.email_verification_sent);
        assert!(!output.session.refresh_token.is_empty());
    }

    // =====================================================
    // FAILURE: user creation fails
    // =====================================================

    #[tokio::test]
    async fn register_user_create_user_fails() {
        let mut repository = MockUserRepositoryPort::new();
        repository.expect_store_verification_token().never();

        let result = orchestrator(
            Err(RegisterUserError::EmailAlreadyExists),
            repository,
            MockEmailNotifierPort::new(),
        )
        .register_user(valid_input())
        .await;

        match result.unwrap_err() {
            UserRegistrationError::RegisterUserFailed(RegisterUserError::EmailAlreadyExists) => {}
            other => panic!("Unexpected error: {:?}", other),
        }
    }
}
