//! Enumerate configuration sources and accumulate extracted agents.

use super::extract::{self, AgentDescriptor};
use super::AgentSet;
use std::fs;
use std::path::Path;

/// Environment variable holding a comma-separated list of agent names.
pub const AGENTS_ENV: &str = "CLAUDE_AGENTS";

/// Project files scanned for agent descriptors, in order.
pub const SOURCE_FILES: &[&str] = &[
    ".claude/agents/available-agents.txt",
    ".claude/PROJECT.md",
    "CLAUDE.md",
    ".claude/config.json",
];

/// Scan the environment variable and the project files under `root`.
pub fn scan(root: &Path, verbose: bool) -> AgentSet {
    let env_value = std::env::var(AGENTS_ENV).ok();
    scan_with_env(root, env_value.as_deref(), verbose)
}

/// Scan with an explicit environment value instead of reading the
/// process environment. Keeps the engine a pure function of its source
/// contents for tests.
pub fn scan_with_env(root: &Path, env_value: Option<&str>, verbose: bool) -> AgentSet {
    let mut agents = AgentSet::new();

    // Env names are bare identifiers, inserted directly with an empty
    // description; the pattern extractor never sees them.
    if let Some(value) = env_value {
        let before = agents.len();
        for token in value.split(',') {
            let name = token.trim();
            if !name.is_empty() {
                agents.insert(AgentDescriptor::new(name, "").record());
            }
        }
        if verbose {
            eprintln!("{}: {} agent(s)", AGENTS_ENV, agents.len() - before);
        }
    }

    for relative in SOURCE_FILES {
        let path = root.join(relative);
        // Missing or unreadable sources are skipped: discovery is
        // best-effort and must never abort the host that invoked it.
        match fs::read_to_string(&path) {
            Ok(content) => {
                let extracted = extract::extract(&content);
                if verbose {
                    eprintln!("{}: {} match(es)", path.display(), extracted.len());
                }
                for descriptor in extracted {
                    agents.insert(descriptor.record());
                }
            }
            Err(_) => {
                if verbose {
                    eprintln!("{}: skipped", path.display());
                }
            }
        }
    }

    agents
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_source(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_no_sources_yields_empty_set() {
        let dir = TempDir::new().unwrap();
        let agents = scan_with_env(dir.path(), None, false);
        assert!(agents.is_empty());
    }

    #[test]
    fn test_env_tokens_become_bare_records() {
        let dir = TempDir::new().unwrap();
        let agents = scan_with_env(dir.path(), Some("foo, bar"), false);
        let expected: Vec<_> = agents.iter().map(String::as_str).collect();
        assert_eq!(expected, vec!["bar:", "foo:"]);
    }

    #[test]
    fn test_env_empty_tokens_are_skipped() {
        let dir = TempDir::new().unwrap();
        let agents = scan_with_env(dir.path(), Some("foo,,  ,bar,"), false);
        assert_eq!(agents.len(), 2);
    }

    #[test]
    fn test_file_source_is_extracted() {
        let dir = TempDir::new().unwrap();
        write_source(
            dir.path(),
            "CLAUDE.md",
            "- code-searcher: Locate functions and code in codebase\n",
        );
        let agents = scan_with_env(dir.path(), None, false);
        assert!(agents.contains("code-searcher:Locate functions and code in codebase"));
        assert_eq!(agents.len(), 1);
    }

    #[test]
    fn test_duplicate_across_sources_collapses() {
        let dir = TempDir::new().unwrap();
        let line = "- qa-engineer: Quality assurance and testing\n";
        write_source(dir.path(), "CLAUDE.md", line);
        write_source(dir.path(), ".claude/PROJECT.md", line);
        let agents = scan_with_env(dir.path(), None, false);
        assert_eq!(agents.len(), 1);
    }

    #[test]
    fn test_env_and_files_accumulate() {
        let dir = TempDir::new().unwrap();
        write_source(dir.path(), "CLAUDE.md", "- error-handler: Error diagnosis\n");
        let agents = scan_with_env(dir.path(), Some("foo"), false);
        assert!(agents.contains("foo:"));
        assert!(agents.contains("error-handler:Error diagnosis"));
    }

    #[test]
    fn test_unreadable_source_is_skipped() {
        let dir = TempDir::new().unwrap();
        // A directory at a source path fails read_to_string regardless
        // of the uid the tests run under.
        fs::create_dir_all(dir.path().join("CLAUDE.md")).unwrap();
        write_source(
            dir.path(),
            ".claude/PROJECT.md",
            "- orchestrator: Coordinate complex multi-domain tasks\n",
        );
        let agents = scan_with_env(dir.path(), None, false);
        assert!(agents.contains("orchestrator:Coordinate complex multi-domain tasks"));
        assert_eq!(agents.len(), 1);
    }

    #[test]
    fn test_non_utf8_source_is_skipped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("CLAUDE.md");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(&[0xff, 0xfe, 0x00, 0x41]).unwrap();
        let agents = scan_with_env(dir.path(), None, false);
        assert!(agents.is_empty());
    }

    #[test]
    fn test_unreadable_source_does_not_change_result() {
        let dir = TempDir::new().unwrap();
        write_source(
            dir.path(),
            ".claude/PROJECT.md",
            "- security-agent: Security analysis\n",
        );
        let without = scan_with_env(dir.path(), None, false);

        fs::create_dir_all(dir.path().join("CLAUDE.md")).unwrap();
        let with_broken = scan_with_env(dir.path(), None, false);

        assert_eq!(without, with_broken);
    }

    #[test]
    fn test_scan_is_deterministic() {
        let dir = TempDir::new().unwrap();
        write_source(
            dir.path(),
            "CLAUDE.md",
            "- code-review-agent: Code quality review\n\"qa-engineer\": \"Testing\"\n",
        );
        let first = scan_with_env(dir.path(), Some("alpha,beta"), false);
        let second = scan_with_env(dir.path(), Some("alpha,beta"), false);
        assert_eq!(first, second);
    }
}
