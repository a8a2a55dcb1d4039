//! Benchmark command - evaluate one position many times across the rayon pool.

use std::time::Instant;

use chess_heuristics::board::Board;
use chess_heuristics::evaluate::ChessEvaluator;
use chess_heuristics::traits::Evaluator;
use log::debug;
use rayon::prelude::*;
use structopt::StructOpt;

use super::{Command, CommandError};

#[derive(StructOpt)]
pub struct BenchmarkArgs {
    #[structopt(
        long = "fen",
        default_value = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
    )]
    pub position: Board,
    #[structopt(short, long, default_value = "100000")]
    pub iterations: usize,
}

impl Command for BenchmarkArgs {
    fn execute(self) -> Result<(), CommandError> {
        if self.iterations == 0 {
            return Err(CommandError::InvalidArgument(
                "--iterations must be at least 1".to_string(),
            ));
        }

        let board = self.position;
        let evaluator = ChessEvaluator::default();
        debug!(
            "benchmarking {} on {} threads",
            board.to_fen(),
            rayon::current_num_threads()
        );

        let start = Instant::now();
        let scores = (0..self.iterations)
            .into_par_iter()
            .map(|_| evaluator.evaluate(&board))
            .collect::<Result<Vec<f64>, _>>()?;
        let elapsed = start.elapsed();

        // every run sees the same snapshot, so every score must agree
        let first = scores[0];
        let deterministic = scores.iter().all(|&score| score == first);

        let seconds = elapsed.as_secs_f64();
        println!("score:          {:+.2}", first);
        println!("deterministic:  {}", deterministic);
        println!("evaluations:    {}", self.iterations);
        println!("threads:        {}", rayon::current_num_threads());
        println!("elapsed:        {:.2} ms", seconds * 1_000.0);
        if seconds > 0.0 {
            println!("throughput:     {:.0} evaluations/s", self.iterations as f64 / seconds);
        }

        Ok(())
    }
}
