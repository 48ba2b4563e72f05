//! Sort, persist and emit the final agent list.

use super::extract::AgentDescriptor;
use super::{defaults, AgentSet};
use crate::error::{ClaudeAgentsError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory the agent list is written into, relative to the scan root.
pub const OUTPUT_DIR: &str = ".claude/agents";

/// File name of the published agent list.
pub const OUTPUT_FILE: &str = "available-agents.txt";

/// Replace an empty scan result with the default roster. The published
/// list is never empty.
pub fn resolve(agents: AgentSet) -> AgentSet {
    if agents.is_empty() {
        defaults::default_agents()
    } else {
        agents
    }
}

/// Render the set as the newline-terminated file payload. Set iteration
/// order is the output order, so the file and stdout cannot diverge.
pub fn render(agents: &AgentSet) -> String {
    let mut out = String::new();
    for record in agents {
        out.push_str(record);
        out.push('\n');
    }
    out
}

/// Path of the published agent list under `root`.
pub fn output_path(root: &Path) -> PathBuf {
    root.join(OUTPUT_DIR).join(OUTPUT_FILE)
}

/// Write the agent list to its well-known file, then echo it on stdout.
///
/// The file always holds plain records; `json` switches the stdout copy
/// to a JSON array of `{name, description}` objects. Unlike source
/// reads, a failure here is fatal: the output file is the deliverable.
pub fn publish(root: &Path, agents: &AgentSet, json: bool) -> Result<()> {
    let dir = root.join(OUTPUT_DIR);
    fs::create_dir_all(&dir).map_err(|source| ClaudeAgentsError::OutputWrite {
        path: dir.clone(),
        source,
    })?;

    let path = dir.join(OUTPUT_FILE);
    let payload = render(agents);
    fs::write(&path, &payload).map_err(|source| ClaudeAgentsError::OutputWrite {
        path: path.clone(),
        source,
    })?;

    if json {
        let descriptors: Vec<AgentDescriptor> = agents
            .iter()
            .map(|record| AgentDescriptor::from_record(record))
            .collect();
        println!("{}", serde_json::to_string_pretty(&descriptors)?);
    } else {
        print!("{}", payload);
    }

    Ok(())
}
