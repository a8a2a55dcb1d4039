//! Common types re-exported for convenience.

pub use crate::board::bitboard::Bitboard;
pub use crate::board::color::Color;
pub use crate::board::piece::Piece;
pub use crate::board::square::Square;
pub use crate::board::Board;
pub use crate::chess_move::{Capture, ChessMove, MoveKind};
pub use crate::evaluate::{evaluate, ChessEvaluator, EvaluationError, EvaluationWeights};
pub use crate::move_orderer::{order, ChessMoveOrderer, MoveBucket};
pub use crate::search_node::{PiecePlacement, SearchNode};
pub use crate::traits::{Evaluator, MoveOrderer, NoOpMoveOrderer};
