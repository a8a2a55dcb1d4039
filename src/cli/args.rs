//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    benchmark::BenchmarkArgs, evaluate::EvaluateArgs, order::OrderArgs, Command, CommandError,
};

#[derive(StructOpt)]
#[structopt(
    name = "chess-heuristics",
    about = "Static evaluation and move ordering for alpha-beta chess search ♛"
)]
pub enum Chess {
    #[structopt(
        name = "evaluate",
        about = "Evaluate a position, provided in FEN notation with `--fen` (default: starting position), and print the material, mobility and pawn-structure balances. The side to move is the maximizing player unless `--maximizing` says otherwise. Individual weights can be overridden with `--material`, `--mobility` and `--pawn-structure`."
    )]
    Evaluate(EvaluateArgs),
    #[structopt(
        name = "order",
        about = "Order a synthetic list of sibling moves, given as comma-separated kinds with `--moves` (quiet, capture, en-passant, promotion, castle), and print the order a search would visit them in."
    )]
    Order(OrderArgs),
    #[structopt(
        name = "benchmark",
        about = "Evaluate a position, provided in FEN notation with `--fen` (default: starting position), `--iterations` times (default: 100000) across all cores, and report the throughput. Build with `--features instrumentation` to also print per-span timings."
    )]
    Benchmark(BenchmarkArgs),
}

impl Command for Chess {
    fn execute(self) -> Result<(), CommandError> {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Evaluate(cmd),
            Order(cmd),
            Benchmark(cmd),
        }
    }
}
