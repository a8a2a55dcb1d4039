use thiserror::Error;

use super::square::Square;

#[derive(Error, Debug, PartialEq)]
pub enum BoardError {
    #[error("Cannot put a piece on {0}, the square is already occupied")]
    SquareOccupiedBoardPutError(Square),
    #[error("Square coordinate out of range: rank {rank}, file {file}")]
    SquareOutOfRange { rank: u8, file: u8 },
    #[error("Invalid algebraic square `{0}`")]
    InvalidAlgebraicSquare(String),
}

#[derive(Error, Debug, PartialEq)]
pub enum FenError {
    #[error("invalid FEN; could not parse board from `{0}`")]
    Malformed(String),
    #[error("invalid FEN; rank {rank} describes {files} files")]
    RankWidth { rank: u8, files: u8 },
    #[error("invalid FEN; {0}")]
    Board(#[from] BoardError),
}
