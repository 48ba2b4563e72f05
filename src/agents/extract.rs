//! Heuristic extraction of agent descriptors from free-form text.

use super::registry;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// One discovered agent: a name plus a short capability description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentDescriptor {
    pub name: String,
    pub description: String,
}

impl AgentDescriptor {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Canonical `name:description` record used for dedup, sorting and output.
    pub fn record(&self) -> String {
        format!("{}:{}", self.name, self.description)
    }

    /// Parse a record back into a descriptor. A record without a colon
    /// is treated as a bare name with an empty description.
    pub fn from_record(record: &str) -> Self {
        match record.split_once(':') {
            Some((name, description)) => Self::new(name, description),
            None => Self::new(record, ""),
        }
    }
}

// The formats agent rosters show up in: markdown list items, JSON-ish
// key/value pairs, and "<name> agent: ..." prose.
static PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)- (\w+[-\w]*): ([^(\n]+)").expect("invalid list pattern"),
        Regex::new(r#"(?i)"(\w+[-\w]*)"\s*:\s*"([^"]+)""#).expect("invalid key-value pattern"),
        Regex::new(r"(?i)(\w+[-\w]*)\s+agent[:\s]+([^\n]+)").expect("invalid narrative pattern"),
    ]
});

/// Extract candidate agent descriptors from a text blob.
///
/// Every pattern runs over the whole text. A candidate survives only if
/// its name contains "agent" (case-insensitively) or is a known
/// canonical name; list and key/value matches are otherwise far too
/// noisy on arbitrary prose. Duplicate matches are left in — the caller
/// deduplicates via set insertion.
pub fn extract(text: &str) -> Vec<AgentDescriptor> {
    let mut agents = Vec::new();

    for pattern in PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            let name = caps[1].trim();
            let description = caps[2].trim();

            if name.to_lowercase().contains("agent") || registry::is_known(name) {
                agents.push(AgentDescriptor::new(name, description));
            }
        }
    }

    agents
}
