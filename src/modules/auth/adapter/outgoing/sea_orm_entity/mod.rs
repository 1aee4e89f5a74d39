pub mod email_verification_tokens;
pub mod users;
