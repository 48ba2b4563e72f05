//! Baseline agent roster used when discovery finds nothing.

use super::extract::AgentDescriptor;
use super::AgentSet;

/// Fixed default roster covering the baseline capabilities.
pub const DEFAULT_AGENTS: &[(&str, &str)] = &[
    ("general-purpose", "General research and multi-step tasks"),
    ("code-searcher", "Locate functions and code in codebase"),
    ("swebok-engineer", "Software engineering best practices"),
    ("qa-engineer", "Quality assurance and testing"),
    ("error-handler", "Error diagnosis and debugging"),
    ("orchestrator", "Coordinate complex multi-domain tasks"),
    ("architect-agent", "System architecture decisions"),
    ("performance-agent", "Performance optimization"),
    ("security-agent", "Security analysis and compliance"),
    ("product-manager", "Product planning and requirements"),
    ("devops-engineer", "CI/CD and deployment"),
    ("test-fixer-agent", "Fix failing tests"),
    ("code-review-agent", "Code quality review"),
];

/// The default roster as a record set.
pub fn default_agents() -> AgentSet {
    DEFAULT_AGENTS
        .iter()
        .map(|(name, description)| AgentDescriptor::new(*name, *description).record())
        .collect()
}
