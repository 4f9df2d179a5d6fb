use actix_web::{HttpResponse, Responder, delete, get, post, web};

use crate::domain::gift::{NewGiftLog, UpdateGiftLog};
use crate::routes::{SharedStore, store_error_response};

#[get("/gifts")]
pub async fn list_gifts(store: web::Data<SharedStore>) -> impl Responder {
    let store = store.read().unwrap_or_else(|e| e.into_inner());
    HttpResponse::Ok().json(&store.data().gifts)
}

#[post("/gifts")]
pub async fn add_gift(
    form: web::Json<NewGiftLog>,
    store: web::Data<SharedStore>,
) -> impl Responder {
    let mut store = store.write().unwrap_or_else(|e| e.into_inner());
    match store.create_gift(form.into_inner()) {
        Ok(gift) => HttpResponse::Created().json(gift),
        Err(e) => store_error_response(e),
    }
}

#[post("/gifts/{id}")]
pub async fn save_gift(
    path: web::Path<String>,
    form: web::Json<UpdateGiftLog>,
    store: web::Data<SharedStore>,
) -> impl Responder {
    let mut store = store.write().unwrap_or_else(|e| e.into_inner());
    match store.update_gift(&path, form.into_inner()) {
        Ok(gift) => HttpResponse::Ok().json(gift),
        Err(e) => store_error_response(e),
    }
}

#[delete("/gifts/{id}")]
pub async fn delete_gift(
    path: web::Path<String>,
    store: web::Data<SharedStore>,
) -> impl Responder {
    let mut store = store.write().unwrap_or_else(|e| e.into_inner());
    match store.delete_gift(&path) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => store_error_response(e),
    }
}
