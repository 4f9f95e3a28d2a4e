//! Command implementations and argument parsing for the kspacing CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use kspacing_core::{
    Clustering, DEFAULT_CLUSTER_COUNT, EdgeSource, KSpacing, KSpacingBuilder, SpacingError,
};
use kspacing_providers_edgelist::{EdgeListError, EdgeListProvider};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "kspacing",
    about = "Compute the maximum spacing of a k-clustering."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Cluster a complete graph read from an edge-list file.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Edge-list file: vertex count on the first line, then `source dest weight`.
    pub path: PathBuf,

    /// Number of clusters to stop at.
    #[arg(
        short = 'k',
        long = "clusters",
        default_value_t = DEFAULT_CLUSTER_COUNT,
        value_parser = clap::value_parser!(usize),
    )]
    pub clusters: usize,

    /// Override name for the data source (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,

    /// Also print the cluster of every vertex.
    #[arg(long)]
    pub assignments: bool,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The edge list was malformed.
    #[error("failed to load edge list: {0}")]
    EdgeList(#[from] EdgeListError),
    /// Configuration or clustering failed.
    #[error(transparent)]
    Core(#[from] SpacingError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name reported by the data source.
    pub data_source: String,
    /// Number of vertices in the loaded graph.
    pub vertex_count: usize,
    /// Clustering produced by the run.
    pub clustering: Clustering,
    /// Whether per-vertex assignments are rendered.
    pub show_assignments: bool,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading or clustering fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kspacing_cli::cli::{Cli, Command, RunCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3\n1 2 5\n1 3 1\n2 3 4\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: file.path().to_path_buf(),
///         clusters: 2,
///         name: None,
///         assignments: false,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.clustering.max_spacing(), Some(1));
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(clusters = command.clusters, path = field::Empty, override_name = field::Empty),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand {
        path,
        clusters,
        name,
        assignments,
    } = command;
    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record(
        "override_name",
        field::display(name.as_deref().unwrap_or("<derived>")),
    );

    let spacing = KSpacingBuilder::new().with_cluster_count(clusters).build()?;
    let provider = load_edge_list(&path, name.as_deref())?;
    let summary = execute(&spacing, &provider, assignments)?;

    info!(
        data_source = summary.data_source.as_str(),
        clusters = summary.clustering.cluster_count(),
        "command completed"
    );
    Ok(summary)
}

fn execute(
    spacing: &KSpacing,
    provider: &EdgeListProvider,
    show_assignments: bool,
) -> Result<ExecutionSummary, CliError> {
    let clustering = spacing.run(provider)?;
    Ok(ExecutionSummary {
        data_source: provider.name().to_owned(),
        vertex_count: provider.vertex_count(),
        clustering,
        show_assignments,
    })
}

#[instrument(
    name = "cli.load_edge_list",
    err,
    skip(override_name),
    fields(vertices = field::Empty, edges = field::Empty),
)]
pub(super) fn load_edge_list(
    path: &Path,
    override_name: Option<&str>,
) -> Result<EdgeListProvider, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let name = derive_data_source_name(path, override_name);
    let provider = EdgeListProvider::try_from_reader(name, BufReader::new(file))?;

    let span = Span::current();
    span.record("vertices", provider.vertex_count());
    span.record("edges", provider.edges().len());
    Ok(provider)
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "data_source".to_owned(), ToOwned::to_owned)
}

/// Renders `summary` to `writer` in a line-oriented text format.
///
/// A run that needed no merge (`k == n`) reports its spacing as `none`.
/// Assignment lines use 1-based vertex labels.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kspacing_cli::cli::{ExecutionSummary, render_summary};
/// # use kspacing_core::{Edge, cluster};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let edges = [Edge::new(1, 2, 7, 0)];
/// let summary = ExecutionSummary {
///     data_source: "pair".into(),
///     vertex_count: 2,
///     clustering: cluster(2, &edges, 1)?,
///     show_assignments: false,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "data source: pair\nvertices: 2\nclusters: 1\nmax spacing: 7\n",
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let clustering = &summary.clustering;
    writeln!(writer, "data source: {}", summary.data_source)?;
    writeln!(writer, "vertices: {}", summary.vertex_count)?;
    writeln!(writer, "clusters: {}", clustering.cluster_count())?;
    match clustering.max_spacing() {
        Some(spacing) => writeln!(writer, "max spacing: {spacing}")?,
        None => writeln!(writer, "max spacing: none")?,
    }
    if summary.show_assignments {
        for (index, cluster) in clustering.assignments().iter().enumerate() {
            writeln!(writer, "{}\t{}", index + 1, cluster.get())?;
        }
    }
    Ok(())
}
