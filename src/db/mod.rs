use anyhow::Result;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::{Pool, Postgres};
use std::time::Duration;
use thiserror::Error;

use crate::config::AppConfig;
use crate::models::{Car, PositionSample};

pub mod queries;
pub mod store;

pub use store::PgPositionStore;

pub type DbPool = Pool<Postgres>;

/// Failure to reach or query the position store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("query did not complete within {0:?}")]
    Timeout(Duration),
}

/// Read-only access to the car catalog and the positions time series.
///
/// "No such row" is never an error here: `get_car` answers `None` and
/// `latest_two_samples` answers an empty vector.
#[allow(async_fn_in_trait)]
pub trait PositionStore {
    /// All cars, ordered by id ascending.
    async fn list_cars(&self) -> Result<Vec<Car>, StoreError>;

    async fn get_car(&self, id: i64) -> Result<Option<Car>, StoreError>;

    /// Up to two samples with the greatest `date`, newest first. Equal
    /// timestamps are ordered by sample id, newest first.
    async fn latest_two_samples(&self, car_id: i64) -> Result<Vec<PositionSample>, StoreError>;

    /// Trivial round trip used for liveness checks.
    async fn ping(&self) -> Result<(), StoreError>;
}

pub async fn init_pool(config: &AppConfig) -> Result<DbPool> {
    let options = PgConnectOptions::new()
        .host(&config.database_host)
        .port(config.database_port)
        .username(&config.database_user)
        .password(&config.database_pass)
        .database(&config.database_name)
        .ssl_mode(PgSslMode::Disable);

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect_with(options)
        .await?;
    Ok(pool)
}
