use std::fmt;
use std::sync::Arc;

use tracing::{error, info};

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};
use crate::auth::application::services::verification_token::IssuedVerificationToken;
use crate::email::application::ports::outgoing::user_email_notifier::{
    UserEmailNotifier, VerificationRecipient,
};

/// Issues a verification token for a user and mails it in the background.
///
/// Only the token hash is stored. Delivery is fire-and-forget: the caller
/// never waits for SMTP and a failed send is logged, not retried.
#[derive(Clone)]
pub struct VerificationDispatcher {
    repository: Arc<dyn UserRepository + Send + Sync>,
    notifier: Arc<dyn UserEmailNotifier + Send + Sync>,
}

impl fmt::Debug for VerificationDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerificationDispatcher").finish_non_exhaustive()
    }
}

impl VerificationDispatcher {
    pub fn new(
        repository: Arc<dyn UserRepository + Send + Sync>,
        notifier: Arc<dyn UserEmailNotifier + Send + Sync>,
    ) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    /// Stores a new token for `user` and spawns the email. Returns once the
    /// token is persisted.
    pub async fn issue(&self, user: &User) -> Result<(), UserRepositoryError> {
        let token = IssuedVerificationToken::generate();

        self.repository
            .store_verification_token(user.id, token.hash, token.expires_at)
            .await?;

        let notifier = self.notifier.clone();
        let recipient = VerificationRecipient {
            email: user.email.clone(),
            name: user.name.clone(),
            token: token.raw,
        };
        let user_id = user.id;

        tokio::spawn(async move {
            match notifier.send_verification_email(recipient).await {
                Ok(()) => info!(user_id = %user_id, "Verification email sent"),
                Err(e) => error!(user_id = %user_id, error = %e, "Verification email failed"),
            }
        });

        Ok(())
    }
}
