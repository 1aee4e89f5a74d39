use async_trait::async_trait;

use crate::vehicle::application::domain::stats::SourceInfo;
use crate::vehicle::application::ports::incoming::use_cases::{GetSourcesError, GetSourcesUseCase};
use crate::vehicle::application::ports::outgoing::VehicleQuery;

pub struct GetSourcesService<Q>
where
    Q: VehicleQuery,
{
    query: Q,
}

impl<Q> GetSourcesService<Q>
where
    Q: VehicleQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSourcesUseCase for GetSourcesService<Q>
where
    Q: VehicleQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<SourceInfo>, GetSourcesError> {
        let counts = self.query.source_counts().await?;
        Ok(counts.into_iter().map(SourceInfo::from).collect())
    }
}
