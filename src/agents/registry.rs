//! Static allow-list of canonical agent names.
//!
//! The extractor's filter would drop matches like `code-searcher` whose
//! name does not contain "agent"; this list acts as the safety valve
//! that keeps them.

/// Canonical agent names shipped with the engine.
pub const KNOWN_AGENTS: &[&str] = &[
    "general-purpose",
    "code-searcher",
    "swebok-engineer",
    "qa-engineer",
    "error-handler",
    "orchestrator",
    "architect-agent",
    "performance-agent",
    "security-agent",
    "product-manager",
    "devops-engineer",
    "test-fixer-agent",
    "code-review-agent",
    "release-agent",
    "scrum-master-agent",
    "babok-agent",
    "pmbok-agent",
    "integration-agent",
    "compliance-agent",
    "ux-design-expert",
    "ux-researcher-agent",
    "technical-writer-agent",
    "community-manager-agent",
    "data-analyst-agent",
    "memory-bank-synchronizer",
    "meta-agent",
    "statusline-setup",
    "get-current-datetime",
    "agent-factory",
];

/// Whether `name` is one of the canonical agent names (exact match).
pub fn is_known(name: &str) -> bool {
    KNOWN_AGENTS.contains(&name)
}
