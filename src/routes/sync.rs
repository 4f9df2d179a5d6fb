//! Bridges the local store and the tabular sheets: `push` mirrors the
//! aggregate out, `pull` replaces the local synced collections with
//! whatever the sheets hold. Both are full-collection operations.

use actix_web::{HttpResponse, Responder, get, post, web};
use log::error;

use crate::dto::api::{ApiResponse, SyncPayload};
use crate::routes::{SharedStore, service_error_response};
use crate::services::sync::{pull_all, sync_data};
use crate::sheets::csv::CsvSheetStore;
use crate::sheets::lock::SheetLock;

#[get("/data")]
pub async fn get_data(store: web::Data<SharedStore>) -> impl Responder {
    let store = store.read().unwrap_or_else(|e| e.into_inner());
    HttpResponse::Ok().json(store.data())
}

#[post("/sync/push")]
pub async fn push_to_sheets(
    store: web::Data<SharedStore>,
    sheets: web::Data<SheetLock<CsvSheetStore>>,
) -> impl Responder {
    let payload = {
        let store = store.read().unwrap_or_else(|e| e.into_inner());
        SyncPayload::from(store.data())
    };

    let result = sheets
        .acquire()
        .map_err(Into::into)
        .and_then(|mut sheets| sync_data(&mut *sheets, &payload));

    match result {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success_message("Synced successfully")),
        Err(e) => {
            error!("Push to sheets failed: {e}");
            HttpResponse::Ok().json(ApiResponse::error(e.to_string()))
        }
    }
}

#[post("/sync/pull")]
pub async fn pull_from_sheets(
    store: web::Data<SharedStore>,
    sheets: web::Data<SheetLock<CsvSheetStore>>,
) -> impl Responder {
    let remote = match sheets.acquire().map_err(Into::into).and_then(|sheets| pull_all(&*sheets)) {
        Ok(remote) => remote,
        Err(e) => {
            error!("Pull from sheets failed: {e}");
            return HttpResponse::Ok().json(ApiResponse::error(e.to_string()));
        }
    };

    let mut store = store.write().unwrap_or_else(|e| e.into_inner());
    match store.apply_remote(remote) {
        Ok(()) => HttpResponse::Ok().json(store.data()),
        Err(e) => service_error_response(e.into()),
    }
}
