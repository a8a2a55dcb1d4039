/// Weights applied to each per-feature pawn count, in centipawns per pawn.
/// Isolated and doubled pawns are penalties; passed and advanced pawns are bonuses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PawnStructureWeights {
    pub isolated: i32,
    pub doubled: i32,
    pub passed: i32,
    pub advanced: i32,
}

impl Default for PawnStructureWeights {
    fn default() -> Self {
        Self {
            isolated: 25,
            doubled: 25,
            passed: 50,
            advanced: 25,
        }
    }
}

/// Evaluator configuration. The three top-level weights scale the material,
/// mobility and pawn-structure balances (each measured in pawns) into the final score.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EvaluationWeights {
    pub material: f64,
    pub mobility: f64,
    pub pawn_structure: f64,
    pub pawn: PawnStructureWeights,
}

impl Default for EvaluationWeights {
    fn default() -> Self {
        Self {
            material: 10.0,
            mobility: 0.5,
            pawn_structure: 2.0,
            pawn: PawnStructureWeights::default(),
        }
    }
}
