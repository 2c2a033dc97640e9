//! Library half of the `kruskal` binary.
//!
//! Exposes command execution and logging setup so tests and doctests can run
//! the pipeline in-process.

pub mod cli;
pub mod logging;
