//! CLI entry point for the pipe tile grid generator

use clap::Parser;
use pipetile::io::cli::{Cli, GridRunner};
use pipetile::io::logging::init_tracing;

fn main() -> pipetile::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let mut runner = GridRunner::new(cli);
    runner.process(&mut std::io::stdout().lock())
}
