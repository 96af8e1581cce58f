//! flexia command-line entry point

use clap::Parser;
use flexia_cli::{Cli, CliResult};

fn main() -> CliResult<()> {
    Cli::parse().execute()
}
