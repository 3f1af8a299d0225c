use std::fmt;
use std::path::PathBuf;

// ──────────────────── Issue Types ────────────────────

/// A single defect found during an audit.
///
/// Every variant renders (via `Display`) to one self-contained line that
/// names the offending path or fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    /// The skills root contains no `SKILL.md` at all.
    NoSkillsFound { skills_root: PathBuf },
    /// A manifest lacks a frontmatter block, or `name`/`description` is absent or empty.
    MissingFrontmatter { manifest: PathBuf },
    /// A local link target does not exist relative to its document.
    BrokenLink { target: String, document: PathBuf },
    /// A script starts with `#!` but has no executable bit.
    ScriptNotExecutable { script: PathBuf },
    /// The delegated validator script is not where it is expected.
    ValidatorMissing { validator: PathBuf },
    /// The delegated validator exited non-zero for a skill.
    ValidatorFailed { skill_dir: PathBuf, details: String },
    /// The delegated validator process could not be started for a skill.
    ValidatorLaunchFailed { skill_dir: PathBuf, error: String },
    /// The agent README still uses the `change-validator +` alias.
    DeprecatedAlias,
    /// The orchestrator prompt asks for parallel dispatch.
    ParallelOrchestration,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::NoSkillsFound { skills_root } => {
                write!(f, "No SKILL.md files found under `{}`.", skills_root.display())
            }
            Issue::MissingFrontmatter { manifest } => {
                write!(f, "Missing frontmatter fields in `{}`.", manifest.display())
            }
            Issue::BrokenLink { target, document } => {
                write!(f, "Broken link `{target}` in `{}`", document.display())
            }
            Issue::ScriptNotExecutable { script } => write!(
                f,
                "Script has shebang but is not executable: `{}`",
                script.display()
            ),
            Issue::ValidatorMissing { validator } => {
                write!(f, "Missing validator script: `{}`", validator.display())
            }
            Issue::ValidatorFailed { skill_dir, details } => write!(
                f,
                "quick_validate failed for `{}`: {details}",
                skill_dir.display()
            ),
            Issue::ValidatorLaunchFailed { skill_dir, error } => write!(
                f,
                "quick_validate could not be launched for `{}`: {error}",
                skill_dir.display()
            ),
            Issue::DeprecatedAlias => {
                f.write_str("README references deprecated `change-validator` alias.")
            }
            Issue::ParallelOrchestration => {
                f.write_str("Orchestrator prompt expects parallel skill runs.")
            }
        }
    }
}

// ──────────────────── Report Types ────────────────────

/// Outcome of one audit run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditReport {
    /// Number of `SKILL.md` manifests discovered.
    pub skills_scanned: usize,
    /// Issues in check order, then enumeration order.
    pub issues: Vec<Issue>,
}

impl AuditReport {
    /// Whether the audit found nothing to report.
    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }

    /// Process exit status: 0 on a clean run, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.passed() { 0 } else { 1 }
    }

    /// Render the report as printed to standard output.
    pub fn render(&self) -> String {
        let mut out = format!("Skills scanned: {}\n", self.skills_scanned);
        if self.passed() {
            out.push_str("Issues found: 0\n");
            out.push_str("Audit passed.\n");
            return out;
        }

        out.push_str(&format!("Issues found: {}\n", self.issues.len()));
        for issue in &self.issues {
            out.push_str(&format!("- {issue}\n"));
        }
        out
    }
}
