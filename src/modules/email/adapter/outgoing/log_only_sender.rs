use crate::email::application::ports::outgoing::email_sender::{EmailSendError, EmailSender};
use async_trait::async_trait;
use tracing::warn;

/// Used when SMTP is not configured. Drops the message and leaves a log line.
#[derive(Debug, Default, Clone)]
pub struct LogOnlyEmailSender;

#[async_trait]
impl EmailSender for LogOnlyEmailSender {
    async fn send_email(&self, to: &str, subject: &str, _body: &str) -> Result<(), EmailSendError> {
        warn!(to = %to, subject = %subject, "SMTP not configured, email not sent");
        Ok(())
    }
}
