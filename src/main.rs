//! Spheres CLI - interactive sphere graph editor
//!
//! Usage: spheres <filename>

use anyhow::Context;
use env_logger::Env;
use spheres::cli::{self, CliAction};
use spheres::prelude::*;
use std::io;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init_from_env(Env::default().default_filter_or("warn"));

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or(spheres::NAME);

    match cli::parse_args(&args) {
        Ok(CliAction::Edit(path)) => match edit(&path) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {:#}", e);
                ExitCode::FAILURE
            }
        },
        Ok(CliAction::Help) => {
            println!("{}", cli::usage(program));
            ExitCode::SUCCESS
        }
        Ok(CliAction::Version) => {
            println!("{} {}", spheres::NAME, spheres::VERSION);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn edit(path: &Path) -> anyhow::Result<()> {
    let graph = SphereGraph::load(path)?;
    let mut editor = Editor::new(graph).with_options(EditorOptions::from_env());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    editor
        .run(stdin.lock(), &mut stdout, &mut stderr)
        .context("terminal I/O failed")?;

    Ok(())
}
