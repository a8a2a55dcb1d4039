use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use super::color::Color;
use super::error::FenError;
use super::piece::Piece;
use super::square::Square;
use super::Board;

pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

static FEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        # `(?x)` - insignificant whitespace mode. makes it easier to comment
        # `\x20` - character code for a single space ` `
        ^
        ([pnbrqkPNBRQK1-8]{1,8}) # eighth rank
        /
        ([pnbrqkPNBRQK1-8]{1,8}) # seventh rank
        /
        ([pnbrqkPNBRQK1-8]{1,8}) # sixth rank
        /
        ([pnbrqkPNBRQK1-8]{1,8}) # fifth rank
        /
        ([pnbrqkPNBRQK1-8]{1,8}) # fourth rank
        /
        ([pnbrqkPNBRQK1-8]{1,8}) # third rank
        /
        ([pnbrqkPNBRQK1-8]{1,8}) # second rank
        /
        ([pnbrqkPNBRQK1-8]{1,8}) # first rank
        \x20
        (b|w)                    # current turn
        (?:
          \x20
          ([kqKQ]{1,4}|-)        # castling rights
          \x20
          ([a-h][1-8]|-)         # en passant target square
          (?:
            \x20
            (0|[1-9][0-9]*)      # halfmove count
            \x20
            ([1-9][0-9]*)        # fullmove count
          )?
        )?
        $
        ",
    )
    .expect("FEN regex is valid")
});

impl Board {
    /// Reads piece placement and side to move from a FEN string. The side to move
    /// also becomes the maximizing player. Castling, en passant and clock fields are
    /// checked for shape only; this snapshot has no use for them.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let caps = FEN
            .captures(fen.trim())
            .ok_or_else(|| FenError::Malformed(fen.to_string()))?;

        let mut board = Self::new();

        for rank_capture_index in 1..=8 {
            let rank = (8 - rank_capture_index) as u8;
            let mut file = 0u8;

            for fen_char in caps[rank_capture_index].chars() {
                match Piece::from_fen(fen_char) {
                    Some((piece, color)) => {
                        let square = Square::new(rank, file)
                            .map_err(|_| FenError::RankWidth { rank: rank + 1, files: file + 1 })?;
                        board.put(square, piece, color)?;
                        file += 1;
                    }
                    None => {
                        // must be an empty square count; the regex only admits digits here
                        file += fen_char.to_digit(10).unwrap_or(0) as u8;
                    }
                }
            }

            if file != 8 {
                return Err(FenError::RankWidth {
                    rank: rank + 1,
                    files: file,
                });
            }
        }

        let turn = match &caps[9] {
            "b" => Color::Black,
            _ => Color::White,
        };
        board.set_turn(turn);
        board.set_maximizing_player(turn);

        Ok(board)
    }

    pub fn to_fen(&self) -> String {
        let mut fen_rows = Vec::with_capacity(8);
        for rank in (0..8u8).rev() {
            let mut row = String::new();
            let mut empty_square_count = 0;
            for file in 0..8u8 {
                match self.get(Square::from_index(rank * 8 + file)) {
                    Some((piece, color)) => {
                        if empty_square_count > 0 {
                            row.push_str(&empty_square_count.to_string());
                            empty_square_count = 0;
                        }
                        row.push(piece.to_fen(color));
                    }
                    None => empty_square_count += 1,
                }
            }
            if empty_square_count > 0 {
                row.push_str(&empty_square_count.to_string());
            }
            fen_rows.push(row);
        }

        let turn = match self.turn() {
            Color::White => "w",
            Color::Black => "b",
        };

        format!("{} {} - - 0 1", fen_rows.join("/"), turn)
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Self, Self::Err> {
        Self::from_fen(fen)
    }
}
