//! CLI command implementations.

use chess_heuristics::board::error::FenError;
use chess_heuristics::evaluate::EvaluationError;
use thiserror::Error;

pub mod benchmark;
pub mod evaluate;
pub mod order;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Fen(#[from] FenError),
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
    #[error("{0}")]
    InvalidArgument(String),
}

pub trait Command {
    fn execute(self) -> Result<(), CommandError>;
}
