//! Command-line interface orchestration for kspacing.
//!
//! The CLI offers a single `run` command that loads a complete weighted graph
//! from an edge-list file, clusters it into `k` groups, and reports the
//! maximum spacing.

mod commands;

pub use commands::{Cli, CliError, Command, ExecutionSummary, RunCommand, render_summary, run_cli};

#[cfg(test)]
mod test_helpers;
