pub mod bitboard;
pub mod color;
pub mod error;
pub mod piece;
pub mod square;

mod display;
mod fen;
mod mobility;
mod node;
mod piece_set;

#[cfg(test)]
mod tests;

use bitboard::Bitboard;
use color::Color;
use error::BoardError;
use piece::Piece;
use piece_set::PieceSet;
use square::Square;

use crate::chess_move::ChessMove;

pub use fen::STARTING_POSITION_FEN;
pub use node::BoardPieces;

/// A read-only snapshot of a chess position as seen by one node of a search:
/// piece placement for both sides, the side to move, the side the search is
/// maximizing for, and the move that produced this snapshot (absent at the root).
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    white: PieceSet,
    black: PieceSet,
    turn: Color,
    maximizing_player: Color,
    last_move: Option<ChessMove>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            white: PieceSet::new(),
            black: PieceSet::new(),
            turn: Color::White,
            maximizing_player: Color::White,
            last_move: None,
        }
    }
}

impl Board {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn starting_position() -> Self {
        crate::chess_position! {
            rnbqkbnr
            pppppppp
            ........
            ........
            ........
            ........
            PPPPPPPP
            RNBQKBNR
        }
    }

    pub fn pieces(&self, color: Color) -> &PieceSet {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    pub fn occupied(&self) -> Bitboard {
        self.white.occupied() | self.black.occupied()
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.occupied().overlaps(square.into())
    }

    pub fn get(&self, square: Square) -> Option<(Piece, Color)> {
        if let Some(piece) = self.white.get(square) {
            return Some((piece, Color::White));
        }
        self.black.get(square).map(|piece| (piece, Color::Black))
    }

    pub fn put(&mut self, square: Square, piece: Piece, color: Color) -> Result<(), BoardError> {
        if self.is_occupied(square) {
            return Err(BoardError::SquareOccupiedBoardPutError(square));
        }

        match color {
            Color::White => self.white.put(square, piece),
            Color::Black => self.black.put(square, piece),
        }
    }

    pub fn remove(&mut self, square: Square) -> Option<(Piece, Color)> {
        let (piece, color) = self.get(square)?;
        match color {
            Color::White => self.white.remove(square),
            Color::Black => self.black.remove(square),
        }?;
        Some((piece, color))
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn set_turn(&mut self, turn: Color) -> Color {
        self.turn = turn;
        turn
    }

    pub fn maximizing_player(&self) -> Color {
        self.maximizing_player
    }

    pub fn set_maximizing_player(&mut self, color: Color) -> Color {
        self.maximizing_player = color;
        color
    }

    pub fn last_move(&self) -> Option<&ChessMove> {
        self.last_move.as_ref()
    }

    /// Returns a copy of this snapshot tagged with the move that produced it.
    pub fn with_last_move(&self, chess_move: ChessMove) -> Self {
        let mut child = self.clone();
        child.last_move = Some(chess_move);
        child
    }

    /// Pseudo-legal move count for the piece standing on `square`, or `None` if the
    /// square is empty.
    pub fn mobility(&self, square: Square) -> Option<u32> {
        let (piece, color) = self.get(square)?;
        Some(mobility::count_moves(self, square, piece, color))
    }
}
