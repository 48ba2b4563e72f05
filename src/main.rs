#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;

use claude_agents::agents::{publish, scan};
use claude_agents::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let discovered = scan::scan(&cli.root, cli.verbose);
    if cli.verbose && discovered.is_empty() {
        eprintln!("No agents discovered; publishing the default roster");
    }

    let agents = publish::resolve(discovered);
    publish::publish(&cli.root, &agents, cli.json)?;

    Ok(())
}
