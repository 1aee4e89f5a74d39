use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::dto::RegisterResponse;
use crate::auth::application::domain::entities::PublicUser;
use crate::auth::application::orchestrator::user_registration::UserRegistrationError;
use crate::auth::application::use_cases::register_user::{RegisterUserError, RegisterUserInput};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use tracing::{error, info, warn};

/// Register a new account
///
/// Creates the user, emails a verification link and signs the user in.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterUserInput,
    responses(
        (status = 201, description = "User registered", body = inline(SuccessResponse<RegisterResponse>)),
        (
            status = 400,
            description = "Invalid email, password or name",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_PASSWORD",
                    "message": "Password must be at least 8 characters"
                }
            })
        ),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    let input = req.into_inner();
    info!(email = %input.email, "Registration attempt");

    match data.register_user_orchestrator.register_user(input).await {
        Ok(output) => {
            let session = output.session;
            info!(user_id = %session.user.id, "User registration completed");

            let body = RegisterResponse {
                email_verification_sent: output.email_verification_sent,
                email: session.user.email.clone(),
                user: PublicUser::from(&session.user),
                access_token: session.access_token.clone(),
                expires_in: session.expires_in,
            };
            data.cookies.with_session(
                ApiResponse::created(body),
                &session.access_token,
                &session.refresh_token,
            )
        }
        Err(UserRegistrationError::RegisterUserFailed(e)) => registration_error(&data, e),
        Err(UserRegistrationError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed after registration");
            ApiResponse::internal_error_with(data.expose_error_details, e)
        }
    }
}

fn registration_error(data: &AppState, e: RegisterUserError) -> HttpResponse {
    match e {
        RegisterUserError::InvalidEmail => {
            warn!("Registration rejected: invalid email");
            ApiResponse::bad_request("INVALID_EMAIL", &e.to_string())
        }
        RegisterUserError::InvalidPassword => {
            warn!("Registration rejected: weak password");
            ApiResponse::bad_request("INVALID_PASSWORD", &e.to_string())
        }
        RegisterUserError::InvalidName => {
            warn!("Registration rejected: invalid name");
            ApiResponse::bad_request("INVALID_NAME", &e.to_string())
        }
        RegisterUserError::EmailAlreadyExists => {
            warn!("Registration rejected: email already exists");
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", "Email already registered")
        }
        RegisterUserError::HashingFailed(ref msg)
        | RegisterUserError::RepositoryError(ref msg)
        | RegisterUserError::QueryError(ref msg) => {
            error!(error = %msg, "Registration failed");
            ApiResponse::internal_error_with(data.expose_error_details, msg)
        }
    }
}
