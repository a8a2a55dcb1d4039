use core::fmt;

use crate::board::color::Color;
use crate::board::piece::Piece;
use crate::board::square::{Square, C1, C8, E1, E8, G1, G8};

use super::capture::Capture;
use super::move_kind::MoveKind;

/// An immutable description of the transition that produced a position. The
/// move generator that builds these lives outside this crate; here they are only
/// classified and displayed.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChessMove {
    Standard {
        from: Square,
        to: Square,
        captures: Option<Capture>,
    },
    PawnPromotion {
        from: Square,
        to: Square,
        captures: Option<Capture>,
        promote_to: Piece,
    },
    EnPassant {
        from: Square,
        to: Square,
    },
    /// Encoded as the king's move; the rook's move is implied.
    Castle {
        from: Square,
        to: Square,
    },
}

impl ChessMove {
    pub fn standard(from: Square, to: Square, captures: Option<Capture>) -> Self {
        ChessMove::Standard { from, to, captures }
    }

    pub fn promotion(
        from: Square,
        to: Square,
        captures: Option<Capture>,
        promote_to: Piece,
    ) -> Self {
        ChessMove::PawnPromotion {
            from,
            to,
            captures,
            promote_to,
        }
    }

    pub fn en_passant(from: Square, to: Square) -> Self {
        ChessMove::EnPassant { from, to }
    }

    pub fn castle_kingside(color: Color) -> Self {
        match color {
            Color::White => ChessMove::Castle { from: E1, to: G1 },
            Color::Black => ChessMove::Castle { from: E8, to: G8 },
        }
    }

    pub fn castle_queenside(color: Color) -> Self {
        match color {
            Color::White => ChessMove::Castle { from: E1, to: C1 },
            Color::Black => ChessMove::Castle { from: E8, to: C8 },
        }
    }

    #[inline]
    pub fn kind(&self) -> MoveKind {
        match self {
            ChessMove::Standard { captures: None, .. } => MoveKind::Quiet,
            ChessMove::Standard { captures: Some(_), .. } => MoveKind::Capture,
            ChessMove::PawnPromotion { .. } => MoveKind::PawnPromotion,
            ChessMove::EnPassant { .. } => MoveKind::EnPassant,
            ChessMove::Castle { .. } => MoveKind::Castle,
        }
    }

    pub fn from_square(&self) -> Square {
        match *self {
            ChessMove::Standard { from, .. }
            | ChessMove::PawnPromotion { from, .. }
            | ChessMove::EnPassant { from, .. }
            | ChessMove::Castle { from, .. } => from,
        }
    }

    pub fn to_square(&self) -> Square {
        match *self {
            ChessMove::Standard { to, .. }
            | ChessMove::PawnPromotion { to, .. }
            | ChessMove::EnPassant { to, .. }
            | ChessMove::Castle { to, .. } => to,
        }
    }

    pub fn captures(&self) -> Option<Capture> {
        match *self {
            ChessMove::Standard { captures, .. } | ChessMove::PawnPromotion { captures, .. } => {
                captures
            }
            ChessMove::EnPassant { .. } => Some(Capture(Piece::Pawn)),
            ChessMove::Castle { .. } => None,
        }
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let move_type = match self {
            ChessMove::Standard { .. } => "Move".to_string(),
            ChessMove::PawnPromotion { promote_to, .. } => format!("Promote to {}", promote_to),
            ChessMove::EnPassant { .. } => "En Passant".to_string(),
            ChessMove::Castle { .. } => "Castle".to_string(),
        };
        let capture = match self.captures() {
            Some(capture) => format!(" capturing {}", capture.0),
            None => "".to_string(),
        };
        write!(
            f,
            "{} {}{}{}",
            move_type,
            self.from_square(),
            self.to_square(),
            capture
        )
    }
}

impl fmt::Debug for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format!("{}", self).fmt(f)
    }
}

#[macro_export]
macro_rules! std_move {
    ($from:expr, $to:expr, $capture:expr) => {
        $crate::chess_move::ChessMove::standard($from, $to, Some($capture))
    };
    ($from:expr, $to:expr) => {
        $crate::chess_move::ChessMove::standard($from, $to, None)
    };
}

#[macro_export]
macro_rules! promotion {
    ($from:expr, $to:expr, $captures:expr, $piece:expr) => {
        $crate::chess_move::ChessMove::promotion($from, $to, $captures, $piece)
    };
}

#[macro_export]
macro_rules! en_passant_move {
    ($from:expr, $to:expr) => {
        $crate::chess_move::ChessMove::en_passant($from, $to)
    };
}

#[macro_export]
macro_rules! castle_kingside {
    ($color:expr) => {
        $crate::chess_move::ChessMove::castle_kingside($color)
    };
}

#[macro_export]
macro_rules! castle_queenside {
    ($color:expr) => {
        $crate::chess_move::ChessMove::castle_queenside($color)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::square::*;

    #[test]
    fn test_kind_follows_variant() {
        assert_eq!(MoveKind::Quiet, std_move!(E2, E4).kind());
        assert_eq!(
            MoveKind::Capture,
            std_move!(E4, D5, Capture(Piece::Pawn)).kind()
        );
        assert_eq!(
            MoveKind::PawnPromotion,
            promotion!(E7, E8, None, Piece::Queen).kind()
        );
        assert_eq!(
            MoveKind::PawnPromotion,
            promotion!(E7, D8, Some(Capture(Piece::Rook)), Piece::Knight).kind()
        );
        assert_eq!(MoveKind::EnPassant, en_passant_move!(E5, D6).kind());
        assert_eq!(MoveKind::Castle, castle_kingside!(Color::White).kind());
        assert_eq!(MoveKind::Castle, castle_queenside!(Color::Black).kind());
    }

    #[test]
    fn test_castle_squares() {
        let kingside = castle_kingside!(Color::Black);
        assert_eq!(E8, kingside.from_square());
        assert_eq!(G8, kingside.to_square());
        assert_eq!(None, kingside.captures());

        let queenside = castle_queenside!(Color::White);
        assert_eq!(E1, queenside.from_square());
        assert_eq!(C1, queenside.to_square());
    }

    #[test]
    fn test_en_passant_always_captures_a_pawn() {
        assert_eq!(
            Some(Capture(Piece::Pawn)),
            en_passant_move!(E5, D6).captures()
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            "Move e4d5 capturing pawn",
            std_move!(E4, D5, Capture(Piece::Pawn)).to_string()
        );
        assert_eq!("Castle e1g1", castle_kingside!(Color::White).to_string());
    }
}
