//! Error types for position parsing and move handling.

use thiserror::Error;

/// Errors produced while decoding square names, move notation, or FEN.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Move string is not 4 or 5 plain-ASCII characters
    #[error("unrecognized move notation: {0:?}")]
    Notation(String),

    /// Square name outside a1..h8
    #[error("invalid square name: {0:?}")]
    Square(String),

    /// Promotion character outside q, r, b, n
    #[error("invalid promotion piece: {0:?}")]
    Promotion(String),

    /// FEN string rejected by the rules engine
    #[error("invalid FEN: {0:?}")]
    Fen(String),
}

/// An attempted move that violates the rules of chess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("illegal move")]
pub struct IllegalMove;
