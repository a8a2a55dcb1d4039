use log::trace;
use thiserror::Error;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use crate::board::color::Color;
use crate::board::piece::Piece;
use crate::search_node::SearchNode;
use crate::traits::Evaluator;

use self::evaluation_tables::mobility_value;
use self::pawn_structure::PawnFiles;

mod evaluation_tables;
mod pawn_structure;
mod weights;


pub use evaluation_tables::{material_value, positional_bonus, MATERIAL_VALUES};
pub use pawn_structure::PawnStructure;
pub use weights::{EvaluationWeights, PawnStructureWeights};

#[derive(Error, Debug, PartialEq)]
pub enum EvaluationError {
    #[error("{0} has no king; the position cannot be evaluated")]
    MissingKing(Color),
    #[error("piece reported off the board at rank {rank}, file {file}")]
    SquareOutOfRange { rank: u8, file: u8 },
}

/// The three balances (maximizing minus minimizing, in pawns) and the weighted total.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Evaluation {
    pub material: f64,
    pub mobility: f64,
    pub pawn_structure: f64,
    pub score: f64,
}

/// Everything the terms need from one side, collected in a single pass over its pieces.
/// Sums are kept in integer centipawns so the result does not depend on visiting order.
#[derive(Default)]
struct SideSummary {
    material: i32,
    mobility: i64,
    pawns: PawnFiles,
    kings: u32,
}

impl SideSummary {
    fn collect<N: SearchNode>(node: &N, color: Color) -> Result<Self, EvaluationError> {
        let mut summary = Self::default();

        for placement in node.pieces(color) {
            let square = placement
                .square()
                .ok_or(EvaluationError::SquareOutOfRange {
                    rank: placement.rank,
                    file: placement.file,
                })?;
            let piece = placement.piece;

            summary.material += material_value(piece) + positional_bonus(piece, square, color);
            summary.mobility += mobility_value(piece, placement.legal_moves);

            match piece {
                Piece::Pawn => summary.pawns.add(square),
                Piece::King => summary.kings += 1,
                _ => (),
            }
        }

        if summary.kings == 0 {
            return Err(EvaluationError::MissingKing(color));
        }

        Ok(summary)
    }
}

#[inline(always)]
fn pawns(centipawns: i64) -> f64 {
    centipawns as f64 / 100.0
}

/// Static evaluator combining material, mobility and pawn structure. Positive
/// scores favor the node's maximizing player.
///
/// Precondition: both sides have a king. Nodes without one only show up around
/// terminal positions, which the search driver is expected to score itself.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChessEvaluator {
    weights: EvaluationWeights,
}

impl ChessEvaluator {
    pub fn new(weights: EvaluationWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &EvaluationWeights {
        &self.weights
    }

    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    pub fn evaluate_breakdown<N: SearchNode>(
        &self,
        node: &N,
    ) -> Result<Evaluation, EvaluationError> {
        let maximizing = node.maximizing_player();
        let minimizing = maximizing.opposite();

        let ours = SideSummary::collect(node, maximizing)?;
        let theirs = SideSummary::collect(node, minimizing)?;

        let weights = &self.weights;
        let our_pawns = PawnStructure::analyze(maximizing, &ours.pawns, &theirs.pawns);
        let their_pawns = PawnStructure::analyze(minimizing, &theirs.pawns, &ours.pawns);

        let material = pawns((ours.material - theirs.material).into());
        let mobility = pawns(ours.mobility - theirs.mobility);
        let pawn_structure =
            pawns((our_pawns.score(&weights.pawn) - their_pawns.score(&weights.pawn)).into());

        let score = material * weights.material
            + mobility * weights.mobility
            + pawn_structure * weights.pawn_structure;

        trace!(
            "eval for {}: material {} mobility {} pawns {} => {}",
            maximizing,
            material,
            mobility,
            pawn_structure,
            score
        );

        Ok(Evaluation {
            material,
            mobility,
            pawn_structure,
            score,
        })
    }
}

impl<N: SearchNode> Evaluator<N> for ChessEvaluator {
    #[inline]
    fn evaluate(&self, node: &N) -> Result<f64, EvaluationError> {
        self.evaluate_breakdown(node).map(|evaluation| evaluation.score)
    }
}

/// Scores `node` for its maximizing player with the default weights.
#[inline]
pub fn evaluate<N: SearchNode>(node: &N) -> Result<f64, EvaluationError> {
    ChessEvaluator::default().evaluate(node)
}
