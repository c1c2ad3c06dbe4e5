use actix::{ActorFutureExt, AsyncContext, WrapFuture};
use actix_web_actors::ws;
use log::{info, warn};

use crate::game::MoveIntent;
use crate::models::{ClientMessage, ServerMessage};
use crate::websocket::handler::AnalysisWebSocket;

impl AnalysisWebSocket {
    pub fn handle_move(&mut self, msg: ClientMessage, ctx: &mut ws::WebsocketContext<Self>) {
        let (from, to) = match (msg.move_from.as_deref(), msg.move_to.as_deref()) {
            (Some(from), Some(to)) => (from, to),
            _ => {
                info!("[{}] Move action missing from or to", self.id);
                self.send(
                    ctx,
                    &ServerMessage::error("Move requires from and to squares"),
                );
                return;
            }
        };

        match MoveIntent::from_coords(from, to, msg.promotion.as_deref()) {
            Ok(intent) => self.commit_move(&intent, ctx),
            Err(e) => {
                warn!("[{}] Malformed move from client: {}", self.id, e);
                self.send(ctx, &ServerMessage::error(format!("Malformed move: {}", e)));
            }
        }
    }

    pub fn handle_play_best(&mut self, ctx: &mut ws::WebsocketContext<Self>) {
        if self.session.play_suggested() {
            info!(
                "[{}] Played suggested move; position now {}",
                self.id,
                self.session.position().fen()
            );
            self.spawn_analysis(ctx);
            self.send(ctx, &ServerMessage::state("move_made", &self.session));
        } else {
            self.send(ctx, &ServerMessage::error("No playable suggested move"));
        }
    }

    pub fn handle_reset(&mut self, ctx: &mut ws::WebsocketContext<Self>) {
        self.session.reset();
        info!("[{}] Session reset to the starting position", self.id);
        self.send(ctx, &ServerMessage::state("game_reset", &self.session));
    }

    /// Apply a validated intent; on acceptance kick off analysis of the
    /// new position and push the state.
    fn commit_move(&mut self, intent: &MoveIntent, ctx: &mut ws::WebsocketContext<Self>) {
        if self.session.attempt_move(intent) {
            info!(
                "[{}] Move {} accepted; position now {}",
                self.id,
                intent,
                self.session.position().fen()
            );
            self.spawn_analysis(ctx);
            self.send(ctx, &ServerMessage::state("move_made", &self.session));
        } else {
            info!("[{}] Rejected illegal move {}", self.id, intent);
            self.send(ctx, &ServerMessage::error("Illegal move"));
        }
    }

    /// Request analysis of the current position. The future resolves back
    /// on this actor's context, where the outcome is applied only if its
    /// token still identifies the newest request; a stale response is
    /// dropped without touching the session.
    fn spawn_analysis(&self, ctx: &mut ws::WebsocketContext<Self>) {
        let client = self.app_state.analyzer.clone();
        let token = self.session.latest_token();
        let fen = self.session.position().fen();

        let request = async move { client.request_analysis(&fen).await }
            .into_actor(self)
            .map(move |outcome, act, ctx| {
                if act.session.resolve_analysis(token, outcome) {
                    act.send(ctx, &ServerMessage::state("analysis_update", &act.session));
                } else {
                    info!("[{}] Discarded stale analysis response {}", act.id, token);
                }
            });

        ctx.spawn(request);
    }
}
