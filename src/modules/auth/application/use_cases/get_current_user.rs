use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::UserQuery;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCurrentUserError {
    #[error("user not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IGetCurrentUserUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<User, GetCurrentUserError>;
}

#[derive(Clone)]
pub struct GetCurrentUserUseCase {
    query: Arc<dyn UserQuery + Send + Sync>,
}

impl GetCurrentUserUseCase {
    pub fn new(query: Arc<dyn UserQuery + Send + Sync>) -> Self {
        Self { query }
    }
}

#[async_trait]
impl IGetCurrentUserUseCase for GetCurrentUserUseCase {
    async fn execute(&self, user_id: UserId) -> Result<User, GetCurrentUserError> {
        self.query
            .find_by_id(user_id)
            .await
            .map_err(|e| GetCurrentUserError::QueryError(e.to_string()))?
            .ok_or(GetCurrentUserError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::auth_helper::test_helpers::test_user;
    use crate::tests::support::port_mocks::MockUserQueryPort;

    #[tokio::test]
    async fn returns_user_or_not_found() {
        let mut query = MockUserQueryPort::new();
        query.expect_find_by_id().returning(|id| {
            if id.value() == 1 {
                Ok(Some(test_user(1)))
            } else {
                Ok(None)
            }
        });
        let use_case = GetCurrentUserUseCase::new(Arc::new(query));

        assert_eq!(use_case.execute(UserId::from(1)).await.unwrap().id.value(), 1);
        assert!(matches!(
            use_case.execute(UserId::from(2)).await,
            Err(GetCurrentUserError::NotFound)
        ));
    }
}
