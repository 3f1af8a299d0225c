//! Agent prompt repository checks.

use std::path::Path;

use skillaudit_skills::{discover_markdown, read_text};
use skillaudit_types::Issue;

use crate::links::check_markdown_links;

/// Alias the README must no longer advertise.
const DEPRECATED_ALIAS: &str = "change-validator +";

/// Orchestrator prompt, relative to the agent root.
const ORCHESTRATOR_PROMPT: [&str; 2] = ["prompts", "agent-orchestrator.md"];

/// Phrases implying skills run concurrently. Skills are invoked one at a time.
const PARALLEL_PHRASES: [&str; 2] = ["run agents in parallel", "dispatch in parallel"];

/// Check every markdown document under `agent_root`, then the README and
/// orchestrator prompt for known stale phrasing.
///
/// Missing documents are not issues.
pub fn check_agent_docs(agent_root: &Path) -> Vec<Issue> {
    let mut issues = Vec::new();

    for document in discover_markdown(agent_root) {
        issues.extend(check_markdown_links(&document));
    }

    let readme = agent_root.join("README.md");
    if readme.is_file() && read_text(&readme).contains(DEPRECATED_ALIAS) {
        issues.push(Issue::DeprecatedAlias);
    }

    let orchestrator = ORCHESTRATOR_PROMPT
        .iter()
        .fold(agent_root.to_path_buf(), |path, part| path.join(part));
    if orchestrator.is_file() {
        let text = read_text(&orchestrator).to_lowercase();
        if PARALLEL_PHRASES.iter().any(|p| text.contains(p)) {
            issues.push(Issue::ParallelOrchestration);
        }
    }

    tracing::debug!(
        agent_root = %agent_root.display(),
        issues = issues.len(),
        "Agent docs checked"
    );
    issues
}
