//! JSON route handlers for the application surface.

use actix_web::HttpResponse;
use log::error;

use crate::services::ServiceError;
use crate::store::Store;
use crate::store::errors::StoreError;

pub mod api;
pub mod assistant;
pub mod dashboard;
pub mod events;
pub mod gifts;
pub mod guests;
pub mod sync;
pub mod tasks;
pub mod vendors;

/// Shared application state handed to every handler.
pub type SharedStore = std::sync::RwLock<Store>;

/// Maps a store failure onto the caller-facing HTTP status.
pub fn store_error_response(err: StoreError) -> HttpResponse {
    match err {
        StoreError::NotFound => HttpResponse::NotFound().finish(),
        StoreError::Validation(msg) => HttpResponse::BadRequest().body(msg),
        StoreError::Persist(_) => {
            error!("State persistence failed: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn service_error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().finish(),
        ServiceError::Validation(msg) => HttpResponse::BadRequest().body(msg),
        other => {
            error!("Request failed: {other}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
