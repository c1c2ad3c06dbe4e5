use serde::{Deserialize, Serialize};

use crate::game::GameSession;

/// Message sent from client to server
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ClientMessage {
    pub action: String,
    pub move_from: Option<String>,
    pub move_to: Option<String>,
    pub promotion: Option<String>,
}

/// Message sent from server to client
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ServerMessage {
    pub message_type: String,
    pub fen: Option<String>,
    pub side_to_move: Option<String>,
    pub game_status: Option<String>,
    pub best_move: Option<String>,
    pub score: Option<String>,
    pub analysis_loading: Option<bool>,
    pub analysis_error: Option<bool>,
    pub error: Option<String>,
}

impl ServerMessage {
    /// Snapshot of the session, pushed after every accepted state change.
    pub fn state(message_type: &str, session: &GameSession) -> Self {
        let analysis = session.analysis();
        ServerMessage {
            message_type: message_type.to_string(),
            fen: Some(session.position().fen()),
            side_to_move: Some(session.position().side_to_move_label()),
            game_status: Some(session.position().status_label()),
            best_move: analysis.best_move.clone(),
            score: analysis.score.clone(),
            analysis_loading: Some(analysis.is_pending()),
            analysis_error: Some(analysis.is_failed()),
            error: None,
        }
    }

    /// Error reply for a rejected or malformed request.
    pub fn error(message: impl Into<String>) -> Self {
        ServerMessage {
            message_type: "error".to_string(),
            fen: None,
            side_to_move: None,
            game_status: None,
            best_move: None,
            score: None,
            analysis_loading: None,
            analysis_error: None,
            error: Some(message.into()),
        }
    }
}
