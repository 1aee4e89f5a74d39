/// Who receives a verification email, and the raw token to embed in the link.
#[derive(Debug, Clone)]
pub struct VerificationRecipient {
    pub email: String,
    pub name: String,
    pub token: String,
}

#[derive(Debug, thiserror::Error)]
pub enum UserEmailNotificationError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

#[async_trait::async_trait]
pub trait UserEmailNotifier: Send + Sync {
    async fn send_verification_email(
        &self,
        recipient: VerificationRecipient,
    ) -> Result<(), UserEmailNotificationError>;
}
