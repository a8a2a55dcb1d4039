pub mod board;
pub mod chess_move;
pub mod evaluate;
pub mod move_orderer;
pub mod prelude;
pub mod search_node;
pub mod traits;

#[cfg(feature = "instrumentation")]
pub mod instrumentation;
