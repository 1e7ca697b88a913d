//! Command-line argument handling for the `spheres` binary.

use crate::core::error::{SphereError, SphereResult};
use std::path::PathBuf;

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    /// Open the file and start the command loop.
    Edit(PathBuf),
    /// Print usage and exit.
    Help,
    /// Print the version and exit.
    Version,
}

/// Parse `std::env::args()`-style arguments (program name first).
pub fn parse_args(args: &[String]) -> SphereResult<CliAction> {
    let program = args
        .first()
        .map(String::as_str)
        .unwrap_or(crate::NAME)
        .to_string();

    match args.get(1).map(String::as_str) {
        None => Err(SphereError::Usage { program }),
        Some("--help" | "-h") => Ok(CliAction::Help),
        Some("--version" | "-V") => Ok(CliAction::Version),
        Some(path) => Ok(CliAction::Edit(PathBuf::from(path))),
    }
}

/// Usage text for `--help`.
pub fn usage(program: &str) -> String {
    format!(
        "Usage: {} <filename>\n\
         \n\
         Opens a sphere file and reads commands from standard input.\n\
         Type 'help' at the prompt for the list of commands.\n\
         \n\
         Environment:\n  \
         SPHERES_PROMPT    prompt marker (default \"> \")\n  \
         RUST_LOG          log level, e.g. info or debug",
        program
    )
}
