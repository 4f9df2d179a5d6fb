use actix_web::{HttpResponse, Responder, delete, get, post, web};

use crate::domain::task::{NewTask, UpdateTask};
use crate::routes::{SharedStore, store_error_response};

#[get("/tasks")]
pub async fn list_tasks(store: web::Data<SharedStore>) -> impl Responder {
    let store = store.read().unwrap_or_else(|e| e.into_inner());
    HttpResponse::Ok().json(&store.data().tasks)
}

#[post("/tasks")]
pub async fn add_task(form: web::Json<NewTask>, store: web::Data<SharedStore>) -> impl Responder {
    let mut store = store.write().unwrap_or_else(|e| e.into_inner());
    match store.create_task(form.into_inner()) {
        Ok(task) => HttpResponse::Created().json(task),
        Err(e) => store_error_response(e),
    }
}

#[post("/tasks/{id}")]
pub async fn save_task(
    path: web::Path<String>,
    form: web::Json<UpdateTask>,
    store: web::Data<SharedStore>,
) -> impl Responder {
    let mut store = store.write().unwrap_or_else(|e| e.into_inner());
    match store.update_task(&path, form.into_inner()) {
        Ok(task) => HttpResponse::Ok().json(task),
        Err(e) => store_error_response(e),
    }
}

#[delete("/tasks/{id}")]
pub async fn delete_task(
    path: web::Path<String>,
    store: web::Data<SharedStore>,
) -> impl Responder {
    let mut store = store.write().unwrap_or_else(|e| e.into_inner());
    match store.delete_task(&path) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => store_error_response(e),
    }
}
