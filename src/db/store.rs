use std::future::Future;
use std::time::Duration;

use super::{queries, DbPool, PositionStore, StoreError};
use crate::models::{Car, PositionSample};

/// PostgreSQL implementation of [`PositionStore`].
///
/// Every query runs under `query_timeout`. Dropping a returned future (for
/// example when the HTTP client disconnects) cancels the query and hands the
/// connection back to the pool.
#[derive(Debug, Clone)]
pub struct PgPositionStore {
    pool: DbPool,
    query_timeout: Duration,
}

impl PgPositionStore {
    pub fn new(pool: DbPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }
}

pub(crate) async fn with_deadline<T, F>(deadline: Duration, query: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(deadline, query).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(StoreError::Timeout(deadline)),
    }
}

impl PositionStore for PgPositionStore {
    async fn list_cars(&self) -> Result<Vec<Car>, StoreError> {
        with_deadline(
            self.query_timeout,
            sqlx::query_as::<_, Car>(queries::SELECT_CARS).fetch_all(&self.pool),
        )
        .await
    }

    async fn get_car(&self, id: i64) -> Result<Option<Car>, StoreError> {
        with_deadline(
            self.query_timeout,
            sqlx::query_as::<_, Car>(queries::SELECT_CAR)
                .bind(id)
                .fetch_optional(&self.pool),
        )
        .await
    }

    async fn latest_two_samples(&self, car_id: i64) -> Result<Vec<PositionSample>, StoreError> {
        with_deadline(
            self.query_timeout,
            sqlx::query_as::<_, PositionSample>(queries::SELECT_LATEST_TWO_POSITIONS)
                .bind(car_id)
                .fetch_all(&self.pool),
        )
        .await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        with_deadline(
            self.query_timeout,
            sqlx::query(queries::PING).execute(&self.pool),
        )
        .await
        .map(|_| ())
    }
}
