use actix_web::{HttpResponse, Responder, delete, get, post, web};

use crate::domain::event::{NewWeddingEvent, UpdateWeddingEvent};
use crate::routes::{SharedStore, store_error_response};

#[get("/events")]
pub async fn list_events(store: web::Data<SharedStore>) -> impl Responder {
    let store = store.read().unwrap_or_else(|e| e.into_inner());
    HttpResponse::Ok().json(&store.data().events)
}

#[post("/events")]
pub async fn add_event(
    form: web::Json<NewWeddingEvent>,
    store: web::Data<SharedStore>,
) -> impl Responder {
    let mut store = store.write().unwrap_or_else(|e| e.into_inner());
    match store.create_event(form.into_inner()) {
        Ok(event) => HttpResponse::Created().json(event),
        Err(e) => store_error_response(e),
    }
}

#[post("/events/{id}")]
pub async fn save_event(
    path: web::Path<String>,
    form: web::Json<UpdateWeddingEvent>,
    store: web::Data<SharedStore>,
) -> impl Responder {
    let mut store = store.write().unwrap_or_else(|e| e.into_inner());
    match store.update_event(&path, form.into_inner()) {
        Ok(event) => HttpResponse::Ok().json(event),
        Err(e) => store_error_response(e),
    }
}

#[delete("/events/{id}")]
pub async fn delete_event(
    path: web::Path<String>,
    store: web::Data<SharedStore>,
) -> impl Responder {
    let mut store = store.write().unwrap_or_else(|e| e.into_inner());
    match store.delete_event(&path) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => store_error_response(e),
    }
}
