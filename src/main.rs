//! CLI entry point for the sliding-puzzle shuffle generator

use clap::Parser;
use tileshuffle::io::cli::{Cli, ShuffleRunner};

fn main() -> tileshuffle::Result<()> {
    let cli = Cli::parse();
    let mut runner = ShuffleRunner::new(cli);
    runner.process()
}
