use async_trait::async_trait;
use tracing::debug;

use crate::vehicle::application::domain::entities::{car365_url, CarNumberLookup};
use crate::vehicle::application::ports::incoming::use_cases::{
    LookupCarNumberError, LookupCarNumberUseCase,
};
use crate::vehicle::application::ports::outgoing::VehicleQuery;

pub struct LookupCarNumberService<Q>
where
    Q: VehicleQuery,
{
    query: Q,
}

impl<Q> LookupCarNumberService<Q>
where
    Q: VehicleQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> LookupCarNumberUseCase for LookupCarNumberService<Q>
where
    Q: VehicleQuery + Send + Sync,
{
    async fn execute(&self, car_number: &str) -> Result<CarNumberLookup, LookupCarNumberError> {
        let car_number = car_number.trim();
        if car_number.is_empty() {
            return Err(LookupCarNumberError::EmptyCarNumber);
        }

        let vehicles = self.query.find_by_car_number(car_number).await?;
        let external_info = self.query.external_info(car_number).await?;
        debug!(
            car_number,
            matches = vehicles.len(),
            has_external = external_info.is_some(),
            "Car number lookup"
        );

        Ok(CarNumberLookup {
            vehicles,
            external_info,
            car365_url: car365_url(car_number),
        })
    }
}
