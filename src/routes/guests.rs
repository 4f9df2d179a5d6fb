use actix_web::{HttpResponse, Responder, delete, get, post, web};

use crate::domain::guest::{NewGuest, UpdateGuest};
use crate::routes::{SharedStore, store_error_response};

#[get("/guests")]
pub async fn list_guests(store: web::Data<SharedStore>) -> impl Responder {
    let store = store.read().unwrap_or_else(|e| e.into_inner());
    HttpResponse::Ok().json(&store.data().guests)
}

#[post("/guests")]
pub async fn add_guest(
    form: web::Json<NewGuest>,
    store: web::Data<SharedStore>,
) -> impl Responder {
    let mut store = store.write().unwrap_or_else(|e| e.into_inner());
    match store.create_guest(form.into_inner()) {
        Ok(guest) => HttpResponse::Created().json(guest),
        Err(e) => store_error_response(e),
    }
}

#[post("/guests/{id}")]
pub async fn save_guest(
    path: web::Path<String>,
    form: web::Json<UpdateGuest>,
    store: web::Data<SharedStore>,
) -> impl Responder {
    let mut store = store.write().unwrap_or_else(|e| e.into_inner());
    match store.update_guest(&path, form.into_inner()) {
        Ok(guest) => HttpResponse::Ok().json(guest),
        Err(e) => store_error_response(e),
    }
}

#[delete("/guests/{id}")]
pub async fn delete_guest(
    path: web::Path<String>,
    store: web::Data<SharedStore>,
) -> impl Responder {
    let mut store = store.write().unwrap_or_else(|e| e.into_inner());
    match store.delete_guest(&path) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => store_error_response(e),
    }
}
