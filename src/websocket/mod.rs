pub mod handler;
pub mod session_handlers;

pub use handler::AnalysisWebSocket;

use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use log::info;
use uuid::Uuid;

use crate::state::AppState;

/// WebSocket entry point; every connection gets its own session actor.
pub async fn ws_index(
    req: HttpRequest,
    stream: web::Payload,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let id = Uuid::new_v4().to_string();
    info!("New WebSocket connection: {}", id);
    ws::start(AnalysisWebSocket::new(id, app_state), &req, stream)
}
