//! Material values and positional bonus tables, in centipawns.
//!
//! The bonus tables are drawn as a board diagram from white's point of view:
//! the first row is rank 8, the last row is rank 1. `BONUS_TABLES` re-indexes them
//! at compile time by square index for each color, so black's lookup is the same
//! diagram mirrored along the rank axis.

use crate::board::color::Color;
use crate::board::piece::Piece;
use crate::board::square::Square;

/// Base material, indexed by `Piece as usize`. The king is never traded, so it
/// carries no material of its own; only its placement is scored.
pub const MATERIAL_VALUES: [i32; 6] = [100, 300, 300, 500, 900, 0];

#[rustfmt::skip]
const PAWN_BONUS: [i32; 64] = [
      0,   0,   0,   0,   0,   0,   0,   0,
     50,  50,  50,  50,  50,  50,  50,  50,
     10,  10,  20,  30,  30,  20,  10,  10,
      5,   5,  10,  25,  25,  10,   5,   5,
      0,   0,   0,  20,  20,   0,   0,   0,
      5,  -5, -10,   0,   0, -10,  -5,   5,
      5,  10,  10, -20, -20,  10,  10,   5,
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const KNIGHT_BONUS: [i32; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50,
    -40, -20,   0,   0,   0,   0, -20, -40,
    -30,   0,  10,  15,  15,  10,   0, -30,
    -30,   5,  15,  20,  20,  15,   5, -30,
    -30,   0,  15,  20,  20,  15,   0, -30,
    -30,   5,  10,  15,  15,  10,   5, -30,
    -40, -20,   0,   5,   5,   0, -20, -40,
    -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
const BISHOP_BONUS: [i32; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -10,   0,   5,  10,  10,   5,   0, -10,
    -10,   5,   5,  10,  10,   5,   5, -10,
    -10,   0,  10,  10,  10,  10,   0, -10,
    -10,  10,  10,  10,  10,  10,  10, -10,
    -10,   5,   0,   0,   0,   0,   5, -10,
    -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
const ROOK_BONUS: [i32; 64] = [
      0,   0,   0,   0,   0,   0,   0,   0,
      5,  10,  10,  10,  10,  10,  10,   5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
      0,   0,   0,   5,   5,   0,   0,   0,
];

#[rustfmt::skip]
const QUEEN_BONUS: [i32; 64] = [
    -20, -10, -10,  -5,  -5, -10, -10, -20,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -10,   0,   5,   5,   5,   5,   0, -10,
     -5,   0,   5,   5,   5,   5,   0,  -5,
      0,   0,   5,   5,   5,   5,   0,  -5,
    -10,   5,   5,   5,   5,   5,   0, -10,
    -10,   0,   5,   0,   0,   0,   0, -10,
    -20, -10, -10,  -5,  -5, -10, -10, -20,
];

// Middlegame placement: stay home behind the pawns.
#[rustfmt::skip]
const KING_BONUS: [i32; 64] = [
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -20, -30, -30, -40, -40, -30, -30, -20,
    -10, -20, -20, -20, -20, -20, -20, -10,
     20,  20,   0,   0,   0,   0,  20,  20,
     20,  30,  10,   0,   0,  10,  30,  20,
];

const DIAGRAMS: [[i32; 64]; 6] = [
    PAWN_BONUS,
    KNIGHT_BONUS,
    BISHOP_BONUS,
    ROOK_BONUS,
    QUEEN_BONUS,
    KING_BONUS,
];

/// `BONUS_TABLES[color][piece][square index]`.
pub const BONUS_TABLES: [[[i32; 64]; 6]; 2] = [orient(Color::Black), orient(Color::White)];

/// Re-indexes every diagram by square index for `color`. Row `r` of a diagram is
/// rank `7 - r` for white; black reads the same rows with the rank mirrored.
const fn orient(color: Color) -> [[i32; 64]; 6] {
    let mut tables = [[0; 64]; 6];
    let mut piece = 0;
    while piece < 6 {
        let mut index = 0;
        while index < 64 {
            let rank = index / 8;
            let file = index % 8;
            let row = match color {
                Color::White => 7 - rank,
                Color::Black => rank,
            };
            tables[piece][index] = DIAGRAMS[piece][row * 8 + file];
            index += 1;
        }
        piece += 1;
    }
    tables
}

#[inline(always)]
pub fn material_value(piece: Piece) -> i32 {
    MATERIAL_VALUES[piece as usize]
}

#[inline(always)]
pub fn positional_bonus(piece: Piece, square: Square, color: Color) -> i32 {
    BONUS_TABLES[color as usize][piece as usize][square.index()]
}

/// Mobility is worth a tenth of the moving piece's material per available move.
/// Widened to `i64` so any move count a node reports fits.
#[inline(always)]
pub fn mobility_value(piece: Piece, legal_moves: u32) -> i64 {
    i64::from(legal_moves) * i64::from(material_value(piece)) / 10
}
