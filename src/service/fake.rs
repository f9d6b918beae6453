//! In-memory [`PositionStore`] for tests.

use chrono::{NaiveDate, NaiveDateTime};

use crate::db::{PositionStore, StoreError};
use crate::models::{Car, PositionSample};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    Everything,
    Samples,
}

#[derive(Debug, Default)]
pub struct FakeStore {
    cars: Vec<Car>,
    samples: Vec<PositionSample>,
    failure: Option<Failure>,
}

impl FakeStore {
    pub fn with_cars(mut self, cars: Vec<Car>) -> Self {
        self.cars = cars;
        self
    }

    pub fn with_samples(mut self, samples: Vec<PositionSample>) -> Self {
        self.samples = samples;
        self
    }

    pub fn failing(mut self, failure: Failure) -> Self {
        self.failure = Some(failure);
        self
    }

    fn check(&self, affected: &[Failure]) -> Result<(), StoreError> {
        match self.failure {
            Some(f) if affected.contains(&f) => Err(StoreError::Database(sqlx::Error::PoolTimedOut)),
            _ => Ok(()),
        }
    }
}

impl PositionStore for FakeStore {
    // Returned in insertion order; callers sort.
    async fn list_cars(&self) -> Result<Vec<Car>, StoreError> {
        self.check(&[Failure::Everything])?;
        Ok(self.cars.clone())
    }

    async fn get_car(&self, id: i64) -> Result<Option<Car>, StoreError> {
        self.check(&[Failure::Everything])?;
        Ok(self.cars.iter().find(|c| c.id == id).cloned())
    }

    async fn latest_two_samples(&self, car_id: i64) -> Result<Vec<PositionSample>, StoreError> {
        self.check(&[Failure::Everything, Failure::Samples])?;
        let mut samples: Vec<PositionSample> = self
            .samples
            .iter()
            .filter(|s| s.car_id == car_id)
            .cloned()
            .collect();
        samples.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        samples.truncate(2);
        Ok(samples)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check(&[Failure::Everything])
    }
}

pub fn car(id: i64) -> Car {
    Car {
        id,
        name: Some(format!("Car {}", id)),
        model: "3".to_string(),
        vin: format!("5YJ3E7EB0KF{:06}", id),
        trim_badging: None,
        exterior_color: Some("PearlWhite".to_string()),
    }
}

/// A sample `minute` minutes after a fixed base time.
pub fn sample(car_id: i64, id: i64, minute: i64, latitude: f64, longitude: f64) -> PositionSample {
    PositionSample {
        id,
        car_id,
        date: base_time() + chrono::Duration::minutes(minute),
        latitude,
        longitude,
        speed: Some(50),
        battery_level: Some(64),
    }
}

fn base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}
