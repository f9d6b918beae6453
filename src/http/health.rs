use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};

use crate::db::PositionStore;
use crate::service::{Health, VehicleService};

pub async fn health<S: PositionStore + 'static>(
    service: web::Data<VehicleService<S>>,
) -> HttpResponse {
    match service.check_health().await {
        Health::Healthy => HttpResponse::Ok()
            .insert_header(ContentType::plaintext())
            .body("ok"),
        Health::Unhealthy => HttpResponse::ServiceUnavailable()
            .insert_header(ContentType::plaintext())
            .body("database unavailable"),
    }
}
