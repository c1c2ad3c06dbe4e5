use actix::{Actor, ActorContext, Running, StreamHandler};
use actix_web::web;
use actix_web_actors::ws;
use log::{info, warn};
use std::sync::atomic::Ordering;

use crate::game::GameSession;
use crate::models::{ClientMessage, ServerMessage};
use crate::state::AppState;

/// WebSocket actor owning one board session.
///
/// Every mutation of the session happens inside this actor's context, so
/// no locking is involved; analysis responses are routed back onto the
/// same context before they touch the session (see session_handlers).
pub struct AnalysisWebSocket {
    pub id: String,
    pub app_state: web::Data<AppState>,
    pub session: GameSession,
}

impl AnalysisWebSocket {
    pub fn new(id: String, app_state: web::Data<AppState>) -> Self {
        AnalysisWebSocket {
            id,
            app_state,
            session: GameSession::new(),
        }
    }

    /// Serialize and push a message to the connected client.
    pub fn send(&self, ctx: &mut ws::WebsocketContext<Self>, message: &ServerMessage) {
        if let Ok(text) = serde_json::to_string(message) {
            ctx.text(text);
        } else {
            warn!("[{}] Failed to serialize server message", self.id);
            ctx.text("{\"message_type\": \"error\", \"error\": \"Internal server error\"}");
        }
    }

    fn handle_message(&mut self, msg: ClientMessage, ctx: &mut ws::WebsocketContext<Self>) {
        match msg.action.as_str() {
            "move" => self.handle_move(msg, ctx),
            "play_best" => self.handle_play_best(ctx),
            "reset" => self.handle_reset(ctx),
            _ => {
                info!("[{}] Unknown action: {}", self.id, msg.action);
                self.send(
                    ctx,
                    &ServerMessage::error(format!("Unknown action: {}", msg.action)),
                );
            }
        }
    }
}

impl Actor for AnalysisWebSocket {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        let live = self.app_state.live_sessions.fetch_add(1, Ordering::Relaxed) + 1;
        info!("WebSocket connection started: {} ({} active)", self.id, live);

        // Let the client render the starting position without a probe
        self.send(ctx, &ServerMessage::state("session_started", &self.session));
    }

    fn stopping(&mut self, _: &mut Self::Context) -> Running {
        let live = self.app_state.live_sessions.fetch_sub(1, Ordering::Relaxed) - 1;
        info!("WebSocket connection closed: {} ({} active)", self.id, live);
        Running::Stop
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for AnalysisWebSocket {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(msg)) => {
                ctx.pong(&msg);
            }
            Ok(ws::Message::Pong(_)) => {
                // Do nothing for pong messages
            }
            Ok(ws::Message::Text(text)) => {
                info!("[{}] Received message: {}", self.id, text);
                match serde_json::from_str::<ClientMessage>(text.as_ref()) {
                    Ok(client_msg) => self.handle_message(client_msg, ctx),
                    Err(e) => {
                        warn!("[{}] Error parsing client message: {}", self.id, e);
                        self.send(
                            ctx,
                            &ServerMessage::error(format!("Invalid message format: {}", e)),
                        );
                    }
                }
            }
            Ok(ws::Message::Binary(_)) => {
                warn!("[{}] Binary messages are not supported", self.id);
                self.send(ctx, &ServerMessage::error("Binary messages are not supported"));
            }
            Ok(ws::Message::Close(reason)) => {
                info!("[{}] Connection closed: {:?}", self.id, reason);
                ctx.close(reason);
                ctx.stop();
            }
            _ => {
                ctx.stop();
            }
        }
    }
}
