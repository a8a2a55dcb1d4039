//! The read-only view of a search node that the evaluator and move orderer need.
//!
//! Board representation, move generation and the search driver all live outside
//! this crate. A driver plugs its own node type in by implementing [`SearchNode`];
//! nothing here ever mutates a node.

use crate::board::color::Color;
use crate::board::piece::Piece;
use crate::board::square::Square;
use crate::chess_move::ChessMove;

/// One piece as reported by the board representation.
///
/// The coordinates are kept raw so that a corrupted board is caught by the
/// evaluator instead of being clamped onto the 8x8 grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PiecePlacement {
    pub piece: Piece,
    pub rank: u8,
    pub file: u8,
    /// Legal moves available to this piece, as counted by the move generator.
    pub legal_moves: u32,
}

impl PiecePlacement {
    pub fn new(piece: Piece, square: Square, legal_moves: u32) -> Self {
        Self {
            piece,
            rank: square.rank(),
            file: square.file(),
            legal_moves,
        }
    }

    pub fn square(&self) -> Option<Square> {
        Square::from_rank_file(self.rank, self.file)
    }
}

/// Read accessors over a position snapshot plus the move that produced it.
pub trait SearchNode {
    type Pieces<'a>: Iterator<Item = PiecePlacement>
    where
        Self: 'a;

    /// Every piece belonging to `color`, each visited exactly once.
    fn pieces(&self, color: Color) -> Self::Pieces<'_>;

    /// The move that produced this node. `None` only at the root.
    fn producing_move(&self) -> Option<&ChessMove>;

    /// The side the whole search is maximizing for.
    fn maximizing_player(&self) -> Color;

    /// The side that owns the move in this node.
    fn turn(&self) -> Color;

    fn pieces_of_kind(
        &self,
        color: Color,
        piece: Piece,
    ) -> impl Iterator<Item = PiecePlacement> + '_ {
        self.pieces(color)
            .filter(move |placement| placement.piece == piece)
    }

    fn minimizing_player(&self) -> Color {
        self.maximizing_player().opposite()
    }
}

impl<N: SearchNode + ?Sized> SearchNode for &N {
    type Pieces<'a> = N::Pieces<'a> where Self: 'a;

    #[inline]
    fn pieces(&self, color: Color) -> Self::Pieces<'_> {
        (**self).pieces(color)
    }

    #[inline]
    fn producing_move(&self) -> Option<&ChessMove> {
        (**self).producing_move()
    }

    #[inline]
    fn maximizing_player(&self) -> Color {
        (**self).maximizing_player()
    }

    #[inline]
    fn turn(&self) -> Color {
        (**self).turn()
    }
}
