pub mod capture;
pub mod chess_move;
pub mod move_kind;

pub use capture::Capture;
pub use chess_move::ChessMove;
pub use move_kind::MoveKind;
