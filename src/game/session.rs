//! One board session: position, analysis, and request bookkeeping.

use std::fmt;

use log::warn;

use crate::analysis::{AnalysisState, NO_MOVE};
use crate::game::moves::MoveIntent;
use crate::game::position::Position;

/// Identifier minted for every analysis request. Tokens only grow, so a
/// response can be recognized as stale by comparing its token against the
/// newest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestToken(u64);

impl RequestToken {
    fn next(self) -> RequestToken {
        RequestToken(self.0 + 1)
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The state behind one connected board: the current position, the engine
/// analysis displayed beside it, and the token of the newest analysis
/// request.
///
/// All methods run synchronously on the owning session's thread. The
/// asynchronous part of the analysis round trip lives in the caller, which
/// requests analysis for `latest_token()` after every accepted move and
/// hands the outcome back through `resolve_analysis`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    position: Position,
    latest_token: RequestToken,
    analysis: AnalysisState,
}

impl GameSession {
    pub fn new() -> Self {
        GameSession {
            position: Position::initial(),
            latest_token: RequestToken::default(),
            analysis: AnalysisState::idle(),
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn analysis(&self) -> &AnalysisState {
        &self.analysis
    }

    pub fn latest_token(&self) -> RequestToken {
        self.latest_token
    }

    /// Apply a move if it is legal and return whether it was accepted.
    ///
    /// On acceptance the position is replaced with the result, a new
    /// request token is minted, and the analysis is marked pending while
    /// keeping its previous values visible. The caller is expected to issue
    /// exactly one analysis request for the new position, tagged with
    /// `latest_token()`. A rejected move leaves the session untouched.
    pub fn attempt_move(&mut self, intent: &MoveIntent) -> bool {
        match self.position.validate_and_apply(intent) {
            Ok(next) => {
                self.position = next;
                self.latest_token = self.latest_token.next();
                self.analysis = self.analysis.clone().into_pending();
                true
            }
            Err(_) => false,
        }
    }

    /// Play the engine's suggested best move. Returns false without
    /// touching the session when there is no suggestion, the suggestion is
    /// the no-move sentinel, it does not parse, or it is no longer legal.
    pub fn play_suggested(&mut self) -> bool {
        let best = match &self.analysis.best_move {
            Some(m) if m.as_str() != NO_MOVE => m.clone(),
            _ => return false,
        };
        match best.parse::<MoveIntent>() {
            Ok(intent) => self.attempt_move(&intent),
            Err(e) => {
                warn!("Ignoring unplayable engine suggestion {:?}: {}", best, e);
                false
            }
        }
    }

    /// Return to the starting position and forget the analysis. The token
    /// is advanced so the response to any in-flight request is recognized
    /// as stale when it lands.
    pub fn reset(&mut self) {
        self.position = Position::initial();
        self.latest_token = self.latest_token.next();
        self.analysis = AnalysisState::idle();
    }

    /// Accept an analysis outcome if `token` still identifies the newest
    /// request. A stale outcome is dropped and the session is unchanged;
    /// the return value says whether the outcome was applied.
    pub fn resolve_analysis(&mut self, token: RequestToken, outcome: AnalysisState) -> bool {
        if token != self.latest_token {
            return false;
        }
        self.analysis = outcome;
        true
    }
}

impl Default for GameSession {
    fn default() -> Self {
        GameSession::new()
    }
}
