pub mod get_current_user;
pub mod login_user;
pub mod refresh_token;
pub mod register_user;
pub mod resend_verification;
pub mod verify_email;
