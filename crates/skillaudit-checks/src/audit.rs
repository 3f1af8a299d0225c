//! Audit orchestration.

use skillaudit_config::{AuditSettings, resolve_path};
use skillaudit_skills::{discover_manifests, discover_scripts, parse_frontmatter, read_text};
use skillaudit_types::{AuditReport, Issue};

use crate::agent_docs::check_agent_docs;
use crate::exec_bits::check_script_exec_bit;
use crate::links::check_links_in;
use crate::validator::{CommandRunner, run_delegated_validator};

/// Run every check and collect the findings.
///
/// Order is fixed: per-manifest frontmatter and links, script exec bits,
/// delegated validation, then agent docs. The skill checks only run when at
/// least one manifest exists; agent docs always run.
pub fn run_audit(settings: &AuditSettings, runner: &dyn CommandRunner) -> AuditReport {
    let skills_root = resolve_path(&settings.skills_root);
    let agent_root = resolve_path(&settings.agent_root);
    tracing::info!(
        skills_root = %skills_root.display(),
        agent_root = %agent_root.display(),
        "Starting audit"
    );

    let mut issues = Vec::new();
    let manifests = discover_manifests(&skills_root);

    if manifests.is_empty() {
        issues.push(Issue::NoSkillsFound {
            skills_root: skills_root.clone(),
        });
    } else {
        for manifest in &manifests {
            let text = read_text(manifest);
            if !parse_frontmatter(&text).is_complete() {
                issues.push(Issue::MissingFrontmatter {
                    manifest: manifest.clone(),
                });
            }
            issues.extend(check_links_in(&text, manifest));
        }

        issues.extend(
            discover_scripts(&skills_root)
                .iter()
                .filter_map(|script| check_script_exec_bit(script)),
        );

        issues.extend(run_delegated_validator(
            &skills_root,
            &manifests,
            settings.validator_interpreter.as_deref(),
            runner,
        ));
    }

    issues.extend(check_agent_docs(&agent_root));

    tracing::info!(
        skills = manifests.len(),
        issues = issues.len(),
        "Audit finished"
    );
    AuditReport {
        skills_scanned: manifests.len(),
        issues,
    }
}
