//! Command-line entry point.
//!
//! The binary wraps the library's upload → clean → chart pipeline for use
//! from scripts and shells; the interactive dashboard consumes the same
//! library through its own rendering layer.

#![warn(clippy::all, rust_2018_idioms)]

mod cli;

use clap::Parser as _;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    squeegee::logging::init()?;

    let cli = cli::Cli::parse();
    cli::run_command(cli.command)?;
    Ok(())
}
