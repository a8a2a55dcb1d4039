use std::fmt;

use super::square::Square;
use super::Board;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rank in (0..8u8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8u8 {
                let square = Square::from_index(rank * 8 + file);
                let cell = match self.get(square) {
                    Some((piece, color)) => piece.to_fen(color),
                    None => '.',
                };
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  abcdefgh")
    }
}

/// Builds a `Board` from an 8x8 grid of FEN piece characters, drawn from white's
/// perspective (rank 8 on top). `.` marks an empty square.
#[macro_export]
macro_rules! chess_position {
    ($($piece:tt)*) => {{
        let mut board = $crate::board::Board::new();
        // Convert all input tokens to a string and filter out whitespace characters.
        let pieces: Vec<_> = stringify!($($piece)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        assert_eq!(pieces.len(), 64, "Invalid number of squares. Expected 64, got {}", pieces.len());
        for (i, &c) in pieces.iter().enumerate() {
            if c == '.' {
                continue;
            }
            let (piece, color) = $crate::board::piece::Piece::from_fen(c)
                .expect("Invalid character in chess position");
            // The first character is A8, so the row has to be flipped to get the rank.
            let rank = 7 - (i / 8) as u8;
            let file = (i % 8) as u8;
            let square = $crate::board::square::Square::from_index(rank * 8 + file);
            board.put(square, piece, color).unwrap();
        }
        board
    }};
}
