//! Move intents and the coordinate notation used by the analysis service.

use std::fmt;
use std::str::FromStr;

use chess::{Piece, Square};

use crate::game::error::FormatError;

/// A move as requested by the user or suggested by the engine, before
/// any legality check.
///
/// A missing promotion piece does not mean the move cannot promote; the
/// queen is supplied at application time if the rules require a promotion
/// piece (see Position::validate_and_apply).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveIntent {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Piece>,
}

impl MoveIntent {
    /// Build an intent from separate square names, the shape the board UI
    /// sends. Letter case is not significant.
    pub fn from_coords(from: &str, to: &str, promotion: Option<&str>) -> Result<Self, FormatError> {
        let from = parse_square(from)?;
        let to = parse_square(to)?;
        let promotion = match promotion {
            Some(label) => Some(parse_promotion(label)?),
            None => None,
        };
        Ok(MoveIntent {
            from,
            to,
            promotion,
        })
    }
}

impl FromStr for MoveIntent {
    type Err = FormatError;

    /// Parse coordinate notation: four characters for a plain move
    /// ("e2e4"), five when a promotion piece is spelled out ("e7e8q").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() || (s.len() != 4 && s.len() != 5) {
            return Err(FormatError::Notation(s.to_string()));
        }
        let from = parse_square(&s[0..2])?;
        let to = parse_square(&s[2..4])?;
        let promotion = match s.get(4..5) {
            Some(label) => Some(parse_promotion(label)?),
            None => None,
        };
        Ok(MoveIntent {
            from,
            to,
            promotion,
        })
    }
}

impl fmt::Display for MoveIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(piece) = self.promotion {
            let label = match piece {
                Piece::Queen => 'q',
                Piece::Rook => 'r',
                Piece::Bishop => 'b',
                Piece::Knight => 'n',
                _ => unreachable!(),
            };
            write!(f, "{}", label)?;
        }
        Ok(())
    }
}

fn parse_square(name: &str) -> Result<Square, FormatError> {
    // Square::from_str tolerates trailing characters
    if name.len() != 2 {
        return Err(FormatError::Square(name.to_string()));
    }
    Square::from_str(&name.to_lowercase()).map_err(|_| FormatError::Square(name.to_string()))
}

fn parse_promotion(label: &str) -> Result<Piece, FormatError> {
    match label.to_lowercase().as_str() {
        "q" => Ok(Piece::Queen),
        "r" => Ok(Piece::Rook),
        "b" => Ok(Piece::Bishop),
        "n" => Ok(Piece::Knight),
        _ => Err(FormatError::Promotion(label.to_string())),
    }
}
