use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;
use tracing::error;

use crate::service::LookupError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid car id")]
    InvalidCarId,

    #[error("car not found")]
    NotFound,

    #[error("database error")]
    Store,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidCarId => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::plaintext())
            .body(self.to_string())
    }
}

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::NotFound(_) => ApiError::NotFound,
            LookupError::StoreUnavailable(e) => {
                error!("Store unavailable: {}", e);
                ApiError::Store
            }
        }
    }
}
