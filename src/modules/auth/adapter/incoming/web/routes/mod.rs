mod fetch_user;
mod login_user;
mod logout_user;
mod refresh_token;
mod register_user;
mod resend_verification;
mod verify_email;

pub use fetch_user::*;
pub use login_user::*;
pub use logout_user::*;
pub use refresh_token::*;
pub use register_user::*;
pub use resend_verification::*;
pub use verify_email::*;
