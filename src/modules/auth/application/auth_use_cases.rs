use std::sync::Arc;

use crate::auth::application::use_cases::{
    get_current_user::IGetCurrentUserUseCase, login_user::ILoginUserUseCase,
    refresh_token::IRefreshTokenUseCase, resend_verification::IResendVerificationUseCase,
    verify_email::IVerifyEmailUseCase,
};

/// Account use cases reachable from the HTTP layer. Registration goes
/// through `UserRegistrationOrchestrator` instead.
#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub refresh: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
    pub verify_email: Arc<dyn IVerifyEmailUseCase + Send + Sync>,
    pub resend_verification: Arc<dyn IResendVerificationUseCase + Send + Sync>,
    pub get_current_user: Arc<dyn IGetCurrentUserUseCase + Send + Sync>,
}
