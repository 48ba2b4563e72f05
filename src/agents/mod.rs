//! Agent discovery: scan project context for agent descriptors.
//!
//! The scanner reads a fixed set of sources (the `CLAUDE_AGENTS`
//! environment variable plus a few project files), the extractor pulls
//! candidate `name:description` pairs out of their text, and the
//! publisher sorts the deduplicated result and writes it to
//! `.claude/agents/available-agents.txt` and stdout. When nothing is
//! discovered, a fixed default roster is published instead.

pub mod defaults;
pub mod extract;
pub mod publish;
pub mod registry;
pub mod scan;

pub use extract::AgentDescriptor;

use std::collections::BTreeSet;

/// Canonical `name:description` records accumulated during one run.
///
/// A `BTreeSet` gives both the dedup semantics and the lexicographic
/// output order for free.
pub type AgentSet = BTreeSet<String>;
