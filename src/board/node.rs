use crate::chess_move::ChessMove;
use crate::search_node::{PiecePlacement, SearchNode};

use super::bitboard::Bitboard;
use super::color::Color;
use super::mobility;
use super::Board;

/// Walks one side's pieces square by square, counting each piece's moves as it goes.
pub struct BoardPieces<'a> {
    board: &'a Board,
    color: Color,
    remaining: Bitboard,
}

impl<'a> Iterator for BoardPieces<'a> {
    type Item = PiecePlacement;

    #[inline]
    fn next(&mut self) -> Option<PiecePlacement> {
        let square = self.remaining.pop_lowest()?;
        let piece = self.board.pieces(self.color).get(square)?;
        let legal_moves = mobility::count_moves(self.board, square, piece, self.color);
        Some(PiecePlacement::new(piece, square, legal_moves))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.remaining.count_ones() as usize;
        (count, Some(count))
    }
}

impl SearchNode for Board {
    type Pieces<'a> = BoardPieces<'a>;

    #[inline]
    fn pieces(&self, color: Color) -> BoardPieces<'_> {
        BoardPieces {
            board: self,
            color,
            remaining: Board::pieces(self, color).occupied(),
        }
    }

    #[inline]
    fn producing_move(&self) -> Option<&ChessMove> {
        self.last_move()
    }

    #[inline]
    fn maximizing_player(&self) -> Color {
        Board::maximizing_player(self)
    }

    #[inline]
    fn turn(&self) -> Color {
        Board::turn(self)
    }
}
