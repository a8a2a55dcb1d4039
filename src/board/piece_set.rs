use super::bitboard::Bitboard;
use super::error::BoardError;
use super::piece::Piece;
use super::square::Square;

/// Encapsulates the state for one side's pieces, represented as bitboards.
#[derive(Clone, PartialEq, Debug)]
pub struct PieceSet {
    /// Bitboards for each piece type, indexed by `Piece as usize`.
    bitboards: [Bitboard; 6],

    /// Bitboard representing all occupied squares. Incrementally updated as pieces
    /// are added or removed.
    occupied: Bitboard,
}

impl Default for PieceSet {
    fn default() -> Self {
        PieceSet {
            bitboards: [Bitboard::EMPTY; 6],
            occupied: Bitboard::EMPTY,
        }
    }
}

impl PieceSet {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn get(&self, square: Square) -> Option<Piece> {
        let bb = Bitboard::from(square);
        if !bb.overlaps(self.occupied) {
            return None;
        }
        self.bitboards
            .iter()
            .position(|bitboard| bitboard.overlaps(bb))
            .map(Piece::from_usize)
    }

    pub fn occupied(&self) -> Bitboard {
        self.occupied
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.occupied.overlaps(square.into())
    }

    pub fn put(&mut self, square: Square, piece: Piece) -> Result<(), BoardError> {
        if self.is_occupied(square) {
            return Err(BoardError::SquareOccupiedBoardPutError(square));
        }

        let bb = Bitboard::from(square);
        self.bitboards[piece as usize] |= bb;
        self.occupied |= bb;

        Ok(())
    }

    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        let removed_piece = self.get(square)?;
        let bb = Bitboard::from(square);
        self.bitboards[removed_piece as usize] ^= bb;
        self.occupied ^= bb;
        Some(removed_piece)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::square::*;

    #[test]
    fn test_put_get_remove() {
        let mut pieces = PieceSet::new();
        pieces.put(E4, Piece::Knight).unwrap();
        assert_eq!(Some(Piece::Knight), pieces.get(E4));
        assert!(pieces.is_occupied(E4));
        assert_eq!(
            Err(BoardError::SquareOccupiedBoardPutError(E4)),
            pieces.put(E4, Piece::Queen)
        );
        assert_eq!(Some(Piece::Knight), pieces.remove(E4));
        assert_eq!(None, pieces.get(E4));
        assert!(pieces.occupied().is_empty());
    }
}
