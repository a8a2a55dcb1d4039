//! Evaluate command - print the evaluation breakdown for a position.

use chess_heuristics::board::color::Color;
use chess_heuristics::board::Board;
use chess_heuristics::evaluate::{ChessEvaluator, EvaluationWeights};
use log::debug;
use structopt::StructOpt;

use super::{Command, CommandError};

#[derive(StructOpt)]
pub struct EvaluateArgs {
    #[structopt(
        long = "fen",
        default_value = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
    )]
    pub position: Board,
    /// Side to score for; defaults to the side to move.
    #[structopt(long)]
    pub maximizing: Option<Color>,
    #[structopt(flatten)]
    pub weights: WeightArgs,
}

/// Overrides for the top-level evaluation weights. Unset flags keep the defaults.
#[derive(StructOpt)]
pub struct WeightArgs {
    #[structopt(long)]
    pub material: Option<f64>,
    #[structopt(long)]
    pub mobility: Option<f64>,
    #[structopt(long = "pawn-structure")]
    pub pawn_structure: Option<f64>,
}

impl WeightArgs {
    pub fn to_weights(&self) -> Result<EvaluationWeights, CommandError> {
        let defaults = EvaluationWeights::default();
        let weights = EvaluationWeights {
            material: self.material.unwrap_or(defaults.material),
            mobility: self.mobility.unwrap_or(defaults.mobility),
            pawn_structure: self.pawn_structure.unwrap_or(defaults.pawn_structure),
            ..defaults
        };

        for (name, weight) in [
            ("material", weights.material),
            ("mobility", weights.mobility),
            ("pawn-structure", weights.pawn_structure),
        ] {
            if !weight.is_finite() {
                return Err(CommandError::InvalidArgument(format!(
                    "--{} must be a finite number, got {}",
                    name, weight
                )));
            }
        }

        Ok(weights)
    }
}

impl Command for EvaluateArgs {
    fn execute(self) -> Result<(), CommandError> {
        let mut board = self.position;
        if let Some(color) = self.maximizing {
            board.set_maximizing_player(color);
        }

        let weights = self.weights.to_weights()?;
        debug!("evaluating {} with {:?}", board.to_fen(), weights);
        let evaluation = ChessEvaluator::new(weights).evaluate_breakdown(&board)?;

        println!("{}", board);
        println!("maximizing:     {}", board.maximizing_player());
        println!("material:       {:+.2}", evaluation.material);
        println!("mobility:       {:+.2}", evaluation.mobility);
        println!("pawn structure: {:+.2}", evaluation.pawn_structure);
        println!("score:          {:+.2}", evaluation.score);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_weights_keep_defaults() {
        let args = WeightArgs {
            material: None,
            mobility: Some(1.5),
            pawn_structure: None,
        };
        let weights = args.to_weights().unwrap();
        assert_eq!(10.0, weights.material);
        assert_eq!(1.5, weights.mobility);
        assert_eq!(2.0, weights.pawn_structure);
    }

    #[test]
    fn test_rejects_non_finite_weight() {
        let args = WeightArgs {
            material: Some(f64::NAN),
            mobility: None,
            pawn_structure: None,
        };
        assert!(matches!(
            args.to_weights(),
            Err(CommandError::InvalidArgument(_))
        ));
    }
}
