use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use super::car::Car;

/// One row of the `positions` time series.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct PositionSample {
    #[allow(dead_code)]
    pub id: i64, // only used to break ties on `date`
    #[allow(dead_code)]
    pub car_id: i64, // filtered on in SQL
    pub date: NaiveDateTime, // stored as UTC without zone
    pub latitude: f64,
    pub longitude: f64,
    pub speed: Option<i32>,
    pub battery_level: Option<i32>,
}

/// The latest sample of a car together with the derived heading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedPosition {
    pub latitude: f64,
    pub longitude: f64,
    pub speed: Option<i32>,
    pub battery_level: Option<i32>,
    pub heading: Option<f64>,
    pub date: DateTime<Utc>,
}

impl ResolvedPosition {
    pub fn from_sample(sample: &PositionSample, heading: Option<f64>) -> Self {
        Self {
            latitude: sample.latitude,
            longitude: sample.longitude,
            speed: sample.speed,
            battery_level: sample.battery_level,
            heading,
            date: sample.date.and_utc(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarPosition {
    pub car: Car,
    pub position: Option<ResolvedPosition>,
}
