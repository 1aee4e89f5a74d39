pub mod log_only_sender;
pub mod smtp_sender;

pub use log_only_sender::LogOnlyEmailSender;
pub use smtp_sender::SmtpEmailSender;
