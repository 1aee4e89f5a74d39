use async_trait::async_trait;

use crate::shared::pagination::{PageRequest, PageResult};
use crate::vehicle::application::domain::entities::Vehicle;
use crate::vehicle::application::domain::listing::{VehicleListFilter, VehicleSort};
use crate::vehicle::application::ports::incoming::use_cases::{
    ListVehiclesError, ListVehiclesUseCase,
};
use crate::vehicle::application::ports::outgoing::VehicleQuery;

pub struct ListVehiclesService<Q>
where
    Q: VehicleQuery,
{
    query: Q,
}

impl<Q> ListVehiclesService<Q>
where
    Q: VehicleQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListVehiclesUseCase for ListVehiclesService<Q>
where
    Q: VehicleQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: VehicleListFilter,
        sort: VehicleSort,
        page: PageRequest,
    ) -> Result<PageResult<Vehicle>, ListVehiclesError> {
        self.query
            .list(filter, sort, page)
            .await
            .map_err(ListVehiclesError::from)
    }
}
