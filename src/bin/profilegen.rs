// src/bin/profilegen.rs

use anyhow::Result;
use clap::Parser;
use colored::*;
use profilegen::core::generator;
use std::env;

/// Regenerates every shell profile script from the templates in `templates/`.
///
/// All variance is expressed through the in-code registries; there is nothing
/// to configure on the command line.
#[derive(Parser, Debug)]
#[command(name = "profilegen", version, about)]
struct Cli {}

/// The main entry point of the `profilegen` application.
/// It sets up logging, runs the generation pass over the current directory,
/// and performs centralized error handling.
fn main() {
    env_logger::init();
    let _cli = Cli::parse();

    if let Err(e) = run() {
        // For all errors, print a formatted message to stderr and exit with a
        // failure code. Already-written outputs from earlier iterations are
        // left on disk; there is no rollback.
        eprintln!("\n{}: {:#}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let root = env::current_dir()?;
    log::debug!("Generating profiles under {}", root.display());
    generator::generate(&root)
}
