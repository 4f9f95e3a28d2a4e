//! Small helpers shared across CLI tests.

use std::fs;
use std::io;
use std::path::PathBuf;

use tempfile::TempDir;

use super::commands::run_command;
use super::{CliError, RunCommand};

/// Complete graph on four vertices whose 2-clustering has spacing 2.
pub(super) const SQUARE: &str = "4\n1 2 1\n1 3 4\n1 4 3\n2 3 2\n2 4 5\n3 4 6\n";

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn write_edge_list(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

pub(super) fn run_command_for(path: PathBuf, clusters: usize) -> RunCommand {
    RunCommand {
        path,
        clusters,
        name: None,
        assignments: false,
    }
}

pub(super) fn run_command_expecting_error(cmd: RunCommand, panic_msg: &str) -> CliError {
    match run_command(cmd) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
