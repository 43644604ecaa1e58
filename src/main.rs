//! CLI entry point for the mosaic generator

use clap::Parser;
use mosaic_maker::io::cli::{Cli, MosaicRunner};
use std::process::ExitCode;

// Allow print for the single user-facing failure message
#[allow(clippy::print_stderr)]
fn main() -> ExitCode {
    let cli = Cli::parse();
    let runner = MosaicRunner::new(cli);

    match runner.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Failed to create mosaic: {error}");
            ExitCode::FAILURE
        }
    }
}
