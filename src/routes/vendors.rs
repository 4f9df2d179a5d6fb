use actix_web::{HttpResponse, Responder, delete, get, post, web};

use crate::domain::vendor::{NewVendor, UpdateVendor};
use crate::routes::{SharedStore, store_error_response};

#[get("/vendors")]
pub async fn list_vendors(store: web::Data<SharedStore>) -> impl Responder {
    let store = store.read().unwrap_or_else(|e| e.into_inner());
    HttpResponse::Ok().json(&store.data().vendors)
}

#[post("/vendors")]
pub async fn add_vendor(
    form: web::Json<NewVendor>,
    store: web::Data<SharedStore>,
) -> impl Responder {
    let mut store = store.write().unwrap_or_else(|e| e.into_inner());
    match store.create_vendor(form.into_inner()) {
        Ok(vendor) => HttpResponse::Created().json(vendor),
        Err(e) => store_error_response(e),
    }
}

#[post("/vendors/{id}")]
pub async fn save_vendor(
    path: web::Path<String>,
    form: web::Json<UpdateVendor>,
    store: web::Data<SharedStore>,
) -> impl Responder {
    let mut store = store.write().unwrap_or_else(|e| e.into_inner());
    match store.update_vendor(&path, form.into_inner()) {
        Ok(vendor) => HttpResponse::Ok().json(vendor),
        Err(e) => store_error_response(e),
    }
}

#[delete("/vendors/{id}")]
pub async fn delete_vendor(
    path: web::Path<String>,
    store: web::Data<SharedStore>,
) -> impl Responder {
    let mut store = store.write().unwrap_or_else(|e| e.into_inner());
    match store.delete_vendor(&path) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => store_error_response(e),
    }
}
