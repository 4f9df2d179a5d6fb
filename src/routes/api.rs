//! The raw tabular-store endpoint: a single POST carrying an action
//! envelope, answered with a structured success/error envelope. Every
//! failure — lock timeout included — comes back as `{status:"error"}`
//! in a 200 response, never as a bare transport fault.

use actix_web::{HttpResponse, Responder, post, web};
use log::error;

use crate::dto::api::{ACTION_GET_ALL, ACTION_SYNC_DATA, ApiRequest, ApiResponse};
use crate::services::sync::{pull_all, sync_data};
use crate::sheets::csv::CsvSheetStore;
use crate::sheets::lock::SheetLock;

#[post("/api")]
pub async fn api_endpoint(
    body: web::Json<ApiRequest>,
    sheets: web::Data<SheetLock<CsvSheetStore>>,
) -> impl Responder {
    let request = body.into_inner();

    let response = match request.action.as_str() {
        ACTION_GET_ALL => match sheets.acquire() {
            Ok(store) => match pull_all(&*store) {
                Ok(data) => ApiResponse::success_data(data),
                Err(e) => {
                    error!("GET_ALL failed: {e}");
                    ApiResponse::error(e.to_string())
                }
            },
            Err(e) => ApiResponse::error(e.to_string()),
        },
        ACTION_SYNC_DATA => {
            let Some(payload) = request.data else {
                return HttpResponse::Ok().json(ApiResponse::error("SYNC_DATA requires a payload"));
            };
            match sheets.acquire() {
                Ok(mut store) => match sync_data(&mut *store, &payload) {
                    Ok(()) => ApiResponse::success_message("Synced successfully"),
                    Err(e) => {
                        error!("SYNC_DATA failed: {e}");
                        ApiResponse::error(e.to_string())
                    }
                },
                Err(e) => ApiResponse::error(e.to_string()),
            }
        }
        other => ApiResponse::error(format!("Unknown action: {other}")),
    };

    HttpResponse::Ok().json(response)
}
