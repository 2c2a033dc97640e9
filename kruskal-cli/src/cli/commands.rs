//! Argument parsing and command execution for the `kruskal` binary.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use kruskal_core::{
    DisjointSetStrategy, KruskalBuilder, KruskalError, NodeList, SpanningForest, render_paths,
};
use kruskal_providers_text::{TextGraphProvider, TextGraphProviderError};
use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};

/// Path argument that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Line written before the printed paths.
pub const PATHS_HEADER: &str = "Printing optimal paths:";

const STDIN_NAME: &str = "stdin";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "kruskal",
    about = "Compute the minimum spanning forest of an undirected graph."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Load a graph document and print every node's path to its root.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Graph document to load; omit or pass `-` to read standard input.
    pub path: Option<PathBuf>,

    /// Disjoint-set structure used to detect cycles.
    #[arg(long, value_enum, default_value_t = StrategyArg::OwnerTable)]
    pub strategy: StrategyArg,

    /// Append edge count, component count and total weight.
    #[arg(long)]
    pub summary: bool,
}

/// Command-line spelling of [`DisjointSetStrategy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Direct owner lookup with whole-table relabelling on union.
    OwnerTable,
    /// Union by rank with path compression.
    RankedForest,
}

impl From<StrategyArg> for DisjointSetStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::OwnerTable => Self::OwnerTable,
            StrategyArg::RankedForest => Self::RankedForest,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The graph document could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The graph document could not be read or parsed.
    #[error(transparent)]
    Load(#[from] TextGraphProviderError),
    /// The driver rejected the graph or broke an invariant.
    #[error(transparent)]
    Core(#[from] KruskalError),
}

impl CliError {
    /// Process exit status for the failure.
    ///
    /// `1` for a directed graph, `2` for unreadable or malformed input, and
    /// `3` when the core reports a broken internal invariant.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Core(KruskalError::DirectedGraph) => 1,
            Self::Io { .. } | Self::Load(_) => 2,
            Self::Core(_) => 3,
        }
    }
}

/// Outcome of a successful `run`.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the loaded document.
    pub graph: String,
    /// Disjoint-set strategy the forest was computed with.
    pub strategy: DisjointSetStrategy,
    /// Node names used when printing paths.
    pub nodes: NodeList,
    /// The computed minimum spanning forest.
    pub forest: SpanningForest,
    /// Whether [`render_summary`] appends the totals.
    pub show_totals: bool,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be loaded or the driver
/// rejects it.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kruskal_cli::cli::{Cli, Command, RunCommand, StrategyArg, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3 2 0 1\na\nb\nc\na b 2\nb c 1\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: Some(file.path().to_path_buf()),
///         strategy: StrategyArg::OwnerTable,
///         summary: false,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.forest.total_weight(), 3);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    match command.path.as_deref() {
        Some(path) if path != Path::new(STDIN_PATH) => {
            let name = derive_graph_name(path);
            let reader = open_graph_reader(path)?;
            execute(&command, name, reader)
        }
        _ => {
            let stdin = io::stdin();
            execute(&command, STDIN_NAME.to_owned(), stdin.lock())
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command, reader),
    fields(source = %name, strategy = field::Empty),
)]
pub(super) fn execute<R: BufRead>(
    command: &RunCommand,
    name: String,
    reader: R,
) -> Result<ExecutionSummary, CliError> {
    let strategy = DisjointSetStrategy::from(command.strategy);
    Span::current().record("strategy", field::display(strategy.as_str()));

    let provider =
        TextGraphProvider::try_undirected_from_reader(name, reader).map_err(load_error)?;
    let kruskal = KruskalBuilder::new().with_disjoint_set(strategy).build();
    let forest = kruskal.run(provider.graph())?;

    info!(
        graph = provider.name(),
        accepted = forest.edges().len(),
        components = forest.component_count(),
        "command completed"
    );

    let graph = provider.name().to_owned();
    let nodes = provider.into_graph().nodes().clone();
    Ok(ExecutionSummary {
        graph,
        strategy,
        nodes,
        forest,
        show_totals: command.summary,
    })
}

/// Directed headers are refused before the document body is read, and are
/// reported as the core's directed-graph error.
fn load_error(error: TextGraphProviderError) -> CliError {
    match error {
        TextGraphProviderError::DirectedGraph { line } => {
            warn!(line, "directed graph rejected before loading");
            CliError::Core(KruskalError::DirectedGraph)
        }
        other => CliError::Load(other),
    }
}

#[instrument(name = "cli.open_graph_reader", err, fields(path = %path.display()))]
pub(super) fn open_graph_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_graph_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "graph".to_owned(), ToOwned::to_owned)
}

/// Writes the path header, one rootward path per node and, when requested,
/// the forest totals.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "{PATHS_HEADER}")?;
    render_paths(&summary.forest, &summary.nodes, &mut writer)?;
    if summary.show_totals {
        writeln!(writer, "edges: {}", summary.forest.edges().len())?;
        writeln!(writer, "components: {}", summary.forest.component_count())?;
        writeln!(writer, "total weight: {}", summary.forest.total_weight())?;
    }
    Ok(())
}
