//! Command-line interface for the Kruskal spanning forest driver.
//!
//! `kruskal run` loads a graph document from a file or standard input,
//! computes its minimum spanning forest and prints each node's rootward
//! path.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, PATHS_HEADER, RunCommand, STDIN_PATH, StrategyArg,
    render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
