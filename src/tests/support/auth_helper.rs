#[cfg(test)]
pub mod test_helpers {
    use actix_web::web;
    use chrono::Utc;
    use std::sync::Arc;

    use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
    use crate::auth::application::domain::entities::{User, UserId};
    use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

    pub fn test_jwt_config() -> JwtConfig {
        JwtConfig {
            access_secret: "test_access_secret_for_testing_only_0123".to_string(),
            refresh_secret: "test_refresh_secret_for_testing_only_012".to_string(),
            issuer: "auto-auction".to_string(),
            access_token_expiry: 900,
            refresh_token_expiry: 604800,
        }
    }

    pub fn create_test_jwt_service() -> JwtTokenService {
        JwtTokenService::new(test_jwt_config())
    }

    pub fn test_user(id: i64) -> User {
        User {
            id: UserId::from(id),
            email: "jane@example.com".to_string(),
            password_hash: "$2b$04$hash".to_string(),
            name: "Jane Doe".to_string(),
            email_verified: false,
            email_verified_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    pub fn access_token_for(service: &JwtTokenService, id: i64) -> String {
        service
            .generate_access_token(&test_user(id))
            .expect("token generation")
    }

    pub fn refresh_token_for(service: &JwtTokenService, id: i64) -> String {
        service
            .generate_refresh_token(&test_user(id))
            .expect("token generation")
    }

    /// The provider as the auth extractor expects it in app data.
    pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
        let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(create_test_jwt_service());
        web::Data::new(provider)
    }

    pub fn bearer_for(id: i64) -> (&'static str, String) {
        (
            "Authorization",
            format!("Bearer {}", access_token_for(&create_test_jwt_service(), id)),
        )
    }
}
