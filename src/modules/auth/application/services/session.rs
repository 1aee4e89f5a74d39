use crate::auth::application::domain::entities::{AuthSession, User};
use crate::auth::application::ports::outgoing::token_provider::{TokenError, TokenProvider};

/// Issues a fresh access/refresh pair for `user`.
pub fn issue_session(tokens: &dyn TokenProvider, user: User) -> Result<AuthSession, TokenError> {
    let access_token = tokens.generate_access_token(&user)?;
    let refresh_token = tokens.generate_refresh_token(&user)?;

    Ok(AuthSession {
        access_token,
        refresh_token,
        expires_in: tokens.access_token_expiry(),
        user,
    })
}
