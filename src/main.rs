use anyhow::Result;
use clap::Parser;

use qdash::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
