//! An immutable chess position backed by the rules engine.

use std::fmt;
use std::str::FromStr;

use chess::{Board, BoardStatus, ChessMove, Color, Piece};

use crate::game::error::{FormatError, IllegalMove};
use crate::game::moves::MoveIntent;

/// A chess position: piece placement, side to move, castling rights and
/// en-passant target. Applying a move produces a new value; a `Position`
/// is never modified in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    board: Board,
}

impl Position {
    /// The standard starting position.
    pub fn initial() -> Self {
        Position {
            board: Board::default(),
        }
    }

    /// FEN serialization of this position, as sent to the analysis service.
    pub fn fen(&self) -> String {
        self.board.to_string()
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    /// Side to move as the lowercase label used on the wire.
    pub fn side_to_move_label(&self) -> String {
        match self.board.side_to_move() {
            Color::White => "white".to_string(),
            Color::Black => "black".to_string(),
        }
    }

    /// Game status label: "checkmate", "stalemate", "check", or whose
    /// turn it is.
    pub fn status_label(&self) -> String {
        match self.board.status() {
            BoardStatus::Checkmate => "checkmate".to_string(),
            BoardStatus::Stalemate => "stalemate".to_string(),
            BoardStatus::Ongoing => {
                if self.board.checkers().0 > 0 {
                    "check".to_string()
                } else if self.board.side_to_move() == Color::White {
                    "white_turn".to_string()
                } else {
                    "black_turn".to_string()
                }
            }
        }
    }

    /// Check an intent against the rules and return the position after the
    /// move. `self` is left untouched; an illegal intent changes nothing.
    ///
    /// The plain move is tried first. If the rules reject it, the same
    /// squares are retried as a promotion with the hinted piece (queen
    /// when the intent carries none), so the rules engine decides whether
    /// promotion applies at all.
    pub fn validate_and_apply(&self, intent: &MoveIntent) -> Result<Position, IllegalMove> {
        let plain = ChessMove::new(intent.from, intent.to, None);
        if self.board.legal(plain) {
            return Ok(Position {
                board: self.board.make_move_new(plain),
            });
        }

        let promotion = intent.promotion.unwrap_or(Piece::Queen);
        let promoting = ChessMove::new(intent.from, intent.to, Some(promotion));
        if self.board.legal(promoting) {
            return Ok(Position {
                board: self.board.make_move_new(promoting),
            });
        }

        Err(IllegalMove)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::initial()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

impl FromStr for Position {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let board = Board::from_str(s).map_err(|_| FormatError::Fen(s.to_string()))?;
        Ok(Position { board })
    }
}
