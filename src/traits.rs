//! Seams a search driver programs against.

use crate::evaluate::EvaluationError;
use crate::search_node::SearchNode;

/// Evaluates a search node and returns a score. Higher scores favor the maximizing player.
pub trait Evaluator<N: SearchNode>: Clone + Send + Sync {
    fn evaluate(&self, node: &N) -> Result<f64, EvaluationError>;
}

/// Orders sibling nodes to improve alpha-beta pruning efficiency.
pub trait MoveOrderer<N: SearchNode>: Clone + Send + Sync {
    /// Returns the same nodes, "better" moves first.
    fn order(&self, nodes: Vec<N>) -> Vec<N>;
}

/// A no-op move orderer, for measuring what ordering buys.
#[derive(Clone, Copy, Default, Debug)]
pub struct NoOpMoveOrderer;

impl<N: SearchNode> MoveOrderer<N> for NoOpMoveOrderer {
    #[inline(always)]
    fn order(&self, nodes: Vec<N>) -> Vec<N> {
        nodes
    }
}
