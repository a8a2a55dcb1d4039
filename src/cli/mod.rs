//! Command-line interface for the evaluator and move orderer.
//! This module is not part of the public library API.

pub mod args;
pub mod commands;

pub use args::Chess;
