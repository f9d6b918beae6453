use actix_web::{middleware, web, App, HttpServer};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::db::PositionStore;
use crate::service::VehicleService;

mod cars;
mod error;
mod health;
mod spa;

/// Registers the JSON API under `/api`.
pub fn api<S: PositionStore + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/cars", web::get().to(cars::list_cars::<S>))
            .route("/cars/{id}", web::get().to(cars::get_car_position::<S>))
            .route("/health", web::get().to(health::health::<S>)),
    );
}

/// Runs the HTTP server until it is shut down.
pub async fn serve<S>(config: &AppConfig, store: S) -> std::io::Result<()>
where
    S: PositionStore + Send + Sync + 'static,
{
    let service = web::Data::new(VehicleService::new(store));
    let default_car_id = config.default_car_id;
    let frontend_dir = config.frontend_dir.clone();

    if !frontend_dir.is_dir() {
        warn!(
            "Frontend directory {} not found, serving API only",
            frontend_dir.display()
        );
    }

    info!(
        "Listening on :{} (default car: {})",
        config.port, default_car_id
    );

    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(middleware::Logger::default())
            .configure(api::<S>)
            .configure(|cfg| spa::configure(cfg, default_car_id, &frontend_dir))
    })
    .bind(("0.0.0.0", config.port))?
    .run()
    .await
}
