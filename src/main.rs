//! CLI entry point for the random-walk map generator

use clap::Parser;
use walkgen::io::cli::{Cli, MapProcessor};

fn main() -> walkgen::Result<()> {
    let cli = Cli::parse();
    let default_filter = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut processor = MapProcessor::new(cli);
    processor.process()
}
