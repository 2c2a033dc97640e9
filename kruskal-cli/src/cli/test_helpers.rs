//! Helpers shared by the CLI unit tests.

use std::fs;
use std::io;
use std::path::PathBuf;

use tempfile::TempDir;

use super::commands::{execute, run_command};
use super::{CliError, ExecutionSummary, RunCommand, StrategyArg, render_summary};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn write_document(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

pub(super) fn command(path: Option<PathBuf>, strategy: StrategyArg, summary: bool) -> RunCommand {
    RunCommand {
        path,
        strategy,
        summary,
    }
}

/// Runs `command` against an in-memory document instead of standard input.
pub(super) fn execute_document(
    command: &RunCommand,
    document: &str,
) -> Result<ExecutionSummary, CliError> {
    execute(command, "memory".to_owned(), document.as_bytes())
}

pub(super) fn run_command_expecting_error(cmd: RunCommand, panic_msg: &str) -> CliError {
    match run_command(cmd) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

pub(super) fn rendered(summary: &ExecutionSummary) -> String {
    let mut out = Vec::new();
    if let Err(err) = render_summary(summary, &mut out) {
        panic!("rendering into memory failed: {err}");
    }
    match String::from_utf8(out) {
        Ok(text) => text,
        Err(err) => panic!("rendered output is not UTF-8: {err}"),
    }
}
