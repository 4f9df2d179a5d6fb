use actix_web::{HttpResponse, Responder, get, web};

use crate::routes::SharedStore;
use crate::services::reports;

#[get("/dashboard")]
pub async fn show_dashboard(store: web::Data<SharedStore>) -> impl Responder {
    let store = store.read().unwrap_or_else(|e| e.into_inner());
    HttpResponse::Ok().json(reports::dashboard_summary(store.data()))
}
