//! Assistant proxy routes. Replies are always 200 with a text body;
//! missing credentials and upstream failures surface as the gateway's
//! fixed placeholder strings.

use actix_web::{HttpResponse, Responder, post, web};

use crate::dto::assistant::{AssistantReply, ChatRequest, InviteRequest};
use crate::gemini::GeminiClient;
use crate::routes::SharedStore;
use crate::services::assistant;

#[post("/assistant/chat")]
pub async fn assistant_chat(
    body: web::Json<ChatRequest>,
    store: web::Data<SharedStore>,
    client: web::Data<GeminiClient>,
) -> impl Responder {
    let context = {
        let store = store.read().unwrap_or_else(|e| e.into_inner());
        assistant::build_context(store.data())
    };
    let text = assistant::chat(client.get_ref(), &body.message, &context).await;
    HttpResponse::Ok().json(AssistantReply { text })
}

#[post("/assistant/invite")]
pub async fn assistant_invite(
    body: web::Json<InviteRequest>,
    client: web::Data<GeminiClient>,
) -> impl Responder {
    let text = assistant::generate_invite(
        client.get_ref(),
        &body.guest_name,
        &body.event_name,
        &body.language,
    )
    .await;
    HttpResponse::Ok().json(AssistantReply { text })
}

#[post("/assistant/analyze")]
pub async fn assistant_analyze(
    store: web::Data<SharedStore>,
    client: web::Data<GeminiClient>,
) -> impl Responder {
    let data = {
        let store = store.read().unwrap_or_else(|e| e.into_inner());
        store.data().clone()
    };
    let text = assistant::analyze_budget(client.get_ref(), &data).await;
    HttpResponse::Ok().json(AssistantReply { text })
}
