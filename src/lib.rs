pub mod domain;
pub mod dto;
pub mod gemini;
pub mod models;
pub mod services;
pub mod sheets;
pub mod store;

#[cfg(feature = "server")]
pub mod routes;

#[cfg(feature = "server")]
mod server {
    use std::sync::RwLock;

    use actix_cors::Cors;
    use actix_web::{App, HttpServer, middleware, web};

    use crate::gemini::GeminiClient;
    use crate::models::config::ServerConfig;
    use crate::routes::api::api_endpoint;
    use crate::routes::assistant::{assistant_analyze, assistant_chat, assistant_invite};
    use crate::routes::dashboard::show_dashboard;
    use crate::routes::events::{add_event, delete_event, list_events, save_event};
    use crate::routes::gifts::{add_gift, delete_gift, list_gifts, save_gift};
    use crate::routes::guests::{add_guest, delete_guest, list_guests, save_guest};
    use crate::routes::sync::{get_data, pull_from_sheets, push_to_sheets};
    use crate::routes::tasks::{add_task, delete_task, list_tasks, save_task};
    use crate::routes::vendors::{add_vendor, delete_vendor, list_vendors, save_vendor};
    use crate::sheets::SheetStore;
    use crate::sheets::csv::CsvSheetStore;
    use crate::sheets::lock::SheetLock;
    use crate::sheets::schema;
    use crate::store::Store;
    use crate::store::cache::LocalCache;

    /// Builds and runs the Actix-Web HTTP server using the provided
    /// configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        // Create any missing sheets with their header rows before
        // accepting sync traffic.
        let mut csv_store = CsvSheetStore::new(&server_config.sheets_dir);
        csv_store
            .ensure_sheets(&schema::ALL)
            .map_err(|e| std::io::Error::other(format!("Failed to set up sheets: {e}")))?;
        let sheets = web::Data::new(SheetLock::new(csv_store));

        let cache = LocalCache::new(&server_config.data_file);
        let store = web::Data::new(RwLock::new(Store::open(cache)));

        let gemini = web::Data::new(GeminiClient::new(server_config.gemini_api_key.clone()));

        let bind_address = (server_config.address.clone(), server_config.port);

        HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(api_endpoint)
                .service(get_data)
                .service(push_to_sheets)
                .service(pull_from_sheets)
                .service(show_dashboard)
                .service(list_guests)
                .service(add_guest)
                .service(save_guest)
                .service(delete_guest)
                .service(list_events)
                .service(add_event)
                .service(save_event)
                .service(delete_event)
                .service(list_vendors)
                .service(add_vendor)
                .service(save_vendor)
                .service(delete_vendor)
                .service(list_tasks)
                .service(add_task)
                .service(save_task)
                .service(delete_task)
                .service(list_gifts)
                .service(add_gift)
                .service(save_gift)
                .service(delete_gift)
                .service(assistant_chat)
                .service(assistant_invite)
                .service(assistant_analyze)
                .app_data(store.clone())
                .app_data(sheets.clone())
                .app_data(gemini.clone())
        })
        .bind(bind_address)?
        .run()
        .await
    }
}

#[cfg(feature = "server")]
pub use server::run;
