//! Application entry point.
//!
//! Parses command-line arguments and delegates execution to [`runner::run`].

use clap::Parser;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::fmt;
use ueditor_widget::{cli::Cli, runner};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let max_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::ERROR
    };
    fmt()
        .with_max_level(max_level)
        .with_writer(std::io::stderr)
        .init();
    let mut stdout = std::io::stdout().lock();
    match runner::run(&cli, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("preview failed: {err:#}");
            ExitCode::FAILURE
        }
    }
}
