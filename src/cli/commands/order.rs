//! Order command - show the order a search would visit a list of siblings in.

use chess_heuristics::board::color::Color;
use chess_heuristics::board::piece::Piece;
use chess_heuristics::board::square::*;
use chess_heuristics::board::{Board, BoardPieces};
use chess_heuristics::chess_move::{Capture, ChessMove, MoveKind};
use chess_heuristics::move_orderer::{ChessMoveOrderer, MoveBucket};
use chess_heuristics::search_node::SearchNode;
use chess_heuristics::traits::MoveOrderer;
use structopt::StructOpt;

use super::{Command, CommandError};

#[derive(StructOpt)]
pub struct OrderArgs {
    /// Comma-separated move kinds, in generation order.
    #[structopt(long, use_delimiter = true, required = true)]
    pub moves: Vec<MoveKind>,
}

/// A sibling that remembers where the move generator put it.
struct Sibling {
    position: usize,
    node: Board,
}

impl SearchNode for Sibling {
    type Pieces<'a> = BoardPieces<'a>;

    fn pieces(&self, color: Color) -> BoardPieces<'_> {
        SearchNode::pieces(&self.node, color)
    }

    fn producing_move(&self) -> Option<&ChessMove> {
        self.node.producing_move()
    }

    fn maximizing_player(&self) -> Color {
        SearchNode::maximizing_player(&self.node)
    }

    fn turn(&self) -> Color {
        SearchNode::turn(&self.node)
    }
}

fn sample_move(kind: MoveKind) -> ChessMove {
    match kind {
        MoveKind::Quiet => ChessMove::standard(G1, F3, None),
        MoveKind::Capture => ChessMove::standard(E4, D5, Some(Capture(Piece::Pawn))),
        MoveKind::EnPassant => ChessMove::en_passant(E5, D6),
        MoveKind::PawnPromotion => ChessMove::promotion(B7, B8, None, Piece::Queen),
        MoveKind::Castle => ChessMove::castle_kingside(Color::White),
    }
}

impl Command for OrderArgs {
    fn execute(self) -> Result<(), CommandError> {
        let root = Board::starting_position();
        let siblings: Vec<Sibling> = self
            .moves
            .iter()
            .enumerate()
            .map(|(position, &kind)| Sibling {
                position,
                node: root.with_last_move(sample_move(kind)),
            })
            .collect();

        for sibling in ChessMoveOrderer.order(siblings) {
            let bucket = MoveBucket::of_node(&sibling);
            let kind = sibling
                .producing_move()
                .map(|chess_move| chess_move.kind().to_string())
                .unwrap_or_else(|| "root".to_string());
            println!("{:>3}  {:<12} {:?}", sibling.position, kind, bucket);
        }

        Ok(())
    }
}
