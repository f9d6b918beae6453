use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{web, HttpResponse};
use std::path::Path;

/// `/` redirects to the default car; every other path is served from the
/// built client, falling back to `index.html` for client-side routes.
///
/// Must be registered after the API routes.
pub fn configure(cfg: &mut web::ServiceConfig, default_car_id: i64, frontend_dir: &Path) {
    cfg.route(
        "/",
        web::get().to(move || async move {
            HttpResponse::Found()
                .insert_header((header::LOCATION, format!("/car/{}", default_car_id)))
                .finish()
        }),
    );

    if !frontend_dir.is_dir() {
        return;
    }

    let index = frontend_dir.join("index.html");
    cfg.service(
        Files::new("/", frontend_dir).default_handler(fn_service(move |req: ServiceRequest| {
            let index = index.clone();
            async move {
                let (req, _) = req.into_parts();
                let file = NamedFile::open_async(&index).await?;
                let res = file.into_response(&req);
                Ok::<_, actix_web::Error>(ServiceResponse::new(req, res))
            }
        })),
    );
}
