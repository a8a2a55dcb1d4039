use crate::board::piece::Piece;

/// The piece taken by a capturing move.
#[derive(PartialEq, Clone, Copy, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Capture(pub Piece);
