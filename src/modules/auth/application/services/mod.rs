pub mod session;
pub mod verification_dispatcher;
pub mod verification_token;

pub use session::issue_session;
pub use verification_dispatcher::VerificationDispatcher;
