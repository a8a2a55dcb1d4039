use structopt::StructOpt;

mod cli;

use cli::commands::Command;
use cli::Chess;

fn main() {
    env_logger::init();
    init_instrumentation();

    let result = Chess::from_args().execute();
    report_instrumentation();

    if let Err(error) = result {
        eprintln!("error: {}", error);
        std::process::exit(1);
    }
}

#[cfg(feature = "instrumentation")]
fn init_instrumentation() {
    if let Err(error) = chess_heuristics::instrumentation::init_tracing() {
        eprintln!("failed to install tracing subscriber: {}", error);
    }
}

#[cfg(not(feature = "instrumentation"))]
fn init_instrumentation() {}

#[cfg(feature = "instrumentation")]
fn report_instrumentation() {
    chess_heuristics::instrumentation::print_timing_statistics();
}

#[cfg(not(feature = "instrumentation"))]
fn report_instrumentation() {}
