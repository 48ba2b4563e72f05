use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "claude-agents",
    version,
    about = "Discover available Claude Code agents from project context"
)]
pub struct Cli {
    /// Directory to scan for agent sources (default: current directory)
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Print the agent list to stdout as JSON instead of plain records
    #[arg(long)]
    pub json: bool,

    /// Show per-source scan details on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
