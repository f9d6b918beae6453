use actix_web::{web, HttpResponse};

use super::error::ApiError;
use crate::db::PositionStore;
use crate::service::VehicleService;

pub async fn list_cars<S: PositionStore + 'static>(
    service: web::Data<VehicleService<S>>,
) -> Result<HttpResponse, ApiError> {
    let cars = service.list_cars().await?;
    Ok(HttpResponse::Ok().json(cars))
}

pub async fn get_car_position<S: PositionStore + 'static>(
    service: web::Data<VehicleService<S>>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id: i64 = id.parse().map_err(|_| ApiError::InvalidCarId)?;
    let view = service.car_position(id).await?;
    Ok(HttpResponse::Ok().json(view))
}
