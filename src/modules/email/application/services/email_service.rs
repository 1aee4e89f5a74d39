use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::email::application::ports::outgoing::email_sender::EmailSender;
use crate::email::application::ports::outgoing::user_email_notifier::{
    UserEmailNotificationError, UserEmailNotifier, VerificationRecipient,
};

const VERIFICATION_SUBJECT: &str = "Verify your email address";

/// Renders and sends account emails through an [`EmailSender`].
#[derive(Clone)]
pub struct UserEmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
    app_base_url: String,
}

impl fmt::Debug for UserEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserEmailService")
            .field("sender", &"<dyn EmailSender>")
            .field("app_base_url", &self.app_base_url)
            .finish()
    }
}

impl UserEmailService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>, app_base_url: &str) -> Self {
        Self {
            sender,
            app_base_url: app_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn verification_link(&self, token: &str) -> String {
        format!(
            "{}/verify-email?token={}",
            self.app_base_url,
            urlencoding::encode(token)
        )
    }

    fn render_verification_body(&self, name: &str, link: &str) -> String {
        format!(
            r#"
            <p>Hi {name},</p>
            <p>Thanks for signing up. Please confirm your email address by clicking the link below:</p>
            <p>
                <a href="{link}" style="
                    display: inline-block;
                    padding: 10px 20px;
                    background-color: #2563EB;
                    color: white;
                    text-decoration: none;
                    border-radius: 5px;
                ">Verify Email</a>
            </p>
            <p>Or paste this URL into your browser: {link}</p>
            <p>This link expires in 24 hours.</p>
            "#
        )
    }
}

#[async_trait]
impl UserEmailNotifier for UserEmailService {
    async fn send_verification_email(
        &self,
        recipient: VerificationRecipient,
    ) -> Result<(), UserEmailNotificationError> {
        let link = self.verification_link(&recipient.token);
        let body = self.render_verification_body(&recipient.name, &link);

        self.sender
            .send_email(&recipient.email, VERIFICATION_SUBJECT, &body)
            .await
            .map_err(|e| UserEmailNotificationError::EmailSendingFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::application::ports::outgoing::email_sender::EmailSendError;
    use mockall::mock;

    mock! {
        pub EmailSenderMock {}
        #[async_trait]
        impl EmailSender for EmailSenderMock {
            async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), EmailSendError>;
        }
    }

    fn recipient() -> VerificationRecipient {
        VerificationRecipient {
            email: "jane@example.com".to_string(),
            name: "Jane".to_string(),
            token: "abc123".to_string(),
        }
    }

    #[test]
    fn verification_link_uses_base_url_without_trailing_slash() {
        let service = UserEmailService::new(
            Arc::new(MockEmailSenderMock::new()),
            "https://auction.example.com/",
        );

        assert_eq!(
            service.verification_link("abc123"),
            "https://auction.example.com/verify-email?token=abc123"
        );
    }

    #[tokio::test]
    async fn sends_link_name_and_expiry_notice() {
        let mut sender = MockEmailSenderMock::new();
        sender
            .expect_send_email()
            .withf(|to, subject, body| {
                to == "jane@example.com"
                    && subject == VERIFICATION_SUBJECT
                    && body.contains("Hi Jane")
                    && body.contains("http://localhost:3000/verify-email?token=abc123")
                    && body.contains("expires in 24 hours")
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let service = UserEmailService::new(Arc::new(sender), "http://localhost:3000");
        let result = service.send_verification_email(recipient()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn sender_failure_is_reported() {
        let mut sender = MockEmailSenderMock::new();
        sender
            .expect_send_email()
            .returning(|_, _, _| Err(EmailSendError::TransportFailed("smtp down".to_string())));

        let service = UserEmailService::new(Arc::new(sender), "http://localhost:3000");
        let result = service.send_verification_email(recipient()).await;

        assert!(matches!(
            result,
            Err(UserEmailNotificationError::EmailSendingFailed(msg)) if msg.contains("smtp down")
        ));
    }

    #[test]
    fn test_email_service_debug_format() {
        let service = UserEmailService::new(
            Arc::new(MockEmailSenderMock::new()),
            "http://localhost:3000",
        );

        let debug_output = format!("{:?}", service);
        assert!(debug_output.contains("<dyn EmailSender>"));
    }
}
