use thiserror::Error;
use tracing::{debug, warn};

use super::heading::resolve_heading;
use crate::db::{PositionStore, StoreError};
use crate::models::{Car, CarPosition, ResolvedPosition};

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("car {0} not found")]
    NotFound(i64),

    #[error("position store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Health {
    Healthy,
    Unhealthy,
}

/// Answers "which cars exist" and "where is this car now".
///
/// Every call goes to the store; nothing is cached and nothing is retried.
pub struct VehicleService<S> {
    store: S,
}

impl<S: PositionStore> VehicleService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn list_cars(&self) -> Result<Vec<Car>, LookupError> {
        let mut cars = self.store.list_cars().await?;
        cars.sort_by_key(|car| car.id);
        Ok(cars)
    }

    /// The car with its latest position. A known car without samples yields
    /// `position: None`; an unknown car is [`LookupError::NotFound`].
    pub async fn car_position(&self, id: i64) -> Result<CarPosition, LookupError> {
        let car = match self.store.get_car(id).await? {
            Some(car) => car,
            None => {
                debug!("Car {} not found", id);
                return Err(LookupError::NotFound(id));
            }
        };

        let samples = self.store.latest_two_samples(id).await?;
        let position = samples.first().map(|latest| {
            let heading = resolve_heading(latest, samples.get(1));
            ResolvedPosition::from_sample(latest, heading)
        });

        Ok(CarPosition { car, position })
    }

    pub async fn check_health(&self) -> Health {
        match self.store.ping().await {
            Ok(()) => Health::Healthy,
            Err(e) => {
                warn!("Health check failed: {}", e);
                Health::Unhealthy
            }
        }
    }
}
