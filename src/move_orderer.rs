//! Sibling ordering for improved alpha-beta pruning.

use log::trace;
use smallvec::SmallVec;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use crate::chess_move::{ChessMove, MoveKind};
use crate::search_node::SearchNode;
use crate::traits::MoveOrderer;

/// Priority class of a sibling, searched in declaration order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum MoveBucket {
    /// Captures, promotions and en passant: the moves most likely to swing material.
    HighImpact,
    Castle,
    /// Quiet moves, the root, and anything not classified above.
    Other,
}

impl MoveBucket {
    #[inline(always)]
    pub fn of(kind: Option<MoveKind>) -> Self {
        match kind {
            Some(MoveKind::Capture | MoveKind::PawnPromotion | MoveKind::EnPassant) => {
                MoveBucket::HighImpact
            }
            Some(MoveKind::Castle) => MoveBucket::Castle,
            _ => MoveBucket::Other,
        }
    }

    #[inline(always)]
    pub fn of_node<N: SearchNode>(node: &N) -> Self {
        Self::of(node.producing_move().map(ChessMove::kind))
    }
}

/// Orders siblings by bucket: high-impact, then castling, then everything else.
/// Nodes keep their relative input order within a bucket.
#[derive(Clone, Copy, Default, Debug)]
pub struct ChessMoveOrderer;

impl<N: SearchNode> MoveOrderer<N> for ChessMoveOrderer {
    #[inline]
    fn order(&self, nodes: Vec<N>) -> Vec<N> {
        order(nodes)
    }
}

/// Stable three-way partition of `nodes` by [`MoveBucket`]. Runs in one pass;
/// classes are coarse, so no comparison sort is needed.
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn order<N: SearchNode>(nodes: Vec<N>) -> Vec<N> {
    let total = nodes.len();
    let mut ordered = Vec::with_capacity(total);
    // at most one castle per wing
    let mut castles: SmallVec<[N; 2]> = SmallVec::new();
    let mut others = Vec::with_capacity(total);

    for node in nodes {
        match MoveBucket::of_node(&node) {
            MoveBucket::HighImpact => ordered.push(node),
            MoveBucket::Castle => castles.push(node),
            MoveBucket::Other => others.push(node),
        }
    }

    trace!(
        "ordered {} siblings: {} high-impact, {} castles, {} other",
        total,
        ordered.len(),
        castles.len(),
        others.len()
    );

    ordered.extend(castles);
    ordered.append(&mut others);
    debug_assert_eq!(total, ordered.len());
    ordered
}
