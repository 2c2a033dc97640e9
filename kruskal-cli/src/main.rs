//! Entry point for the `kruskal` binary.
//!
//! Parses arguments, runs the spanning forest driver, prints the rootward
//! paths on stdout and maps failures to exit statuses.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use kruskal_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

/// Status used when a failure does not come from command execution.
const GENERIC_FAILURE: u8 = 2;

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let summary = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_summary(&summary, &mut writer).context("failed to render paths")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    let Err(err) = try_main() else {
        return ExitCode::SUCCESS;
    };

    let cli_error = err.downcast_ref::<CliError>();
    let (code, disjoint_set_code) = cli_error
        .and_then(|cli_error| match cli_error {
            CliError::Core(core) => Some((Some(core.code()), core.disjoint_set_code())),
            _ => None,
        })
        .unwrap_or((None, None));
    error!(
        error = %format!("{err:#}"),
        code = code.map(|code| field::display(code.as_str())),
        disjoint_set_code = disjoint_set_code.map(|code| field::display(code.as_str())),
        "command execution failed"
    );

    match cli_error {
        Some(cli_error) => {
            report_failure(cli_error);
            ExitCode::from(cli_error.exit_code())
        }
        None => ExitCode::from(GENERIC_FAILURE),
    }
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}

#[expect(
    clippy::print_stderr,
    reason = "The failure message is user-facing regardless of the log filter"
)]
fn report_failure(err: &CliError) {
    eprintln!("{err}");
}
