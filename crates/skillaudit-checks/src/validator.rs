//! Delegated per-skill validation through an external `quick_validate.py`.
//!
//! Invocations run one after another and block until the child exits. There
//! is no timeout: a validator that hangs stalls the audit.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;

use skillaudit_types::Issue;

/// Location of the validator, relative to the skills root.
const VALIDATOR_COMPONENTS: [&str; 4] = [".system", "skill-creator", "scripts", "quick_validate.py"];

/// Captured result of a finished child process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Whether the process exited with status 0.
    pub success: bool,
    /// Standard output, lossily decoded.
    pub stdout: String,
    /// Standard error, lossily decoded.
    pub stderr: String,
}

/// Runs an external program to completion.
pub trait CommandRunner {
    /// Run `program` with `args`, wait for it, and capture both output streams.
    fn run(&self, program: &OsStr, args: &[OsString]) -> std::io::Result<CommandOutput>;
}

/// [`CommandRunner`] backed by [`std::process::Command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &OsStr, args: &[OsString]) -> std::io::Result<CommandOutput> {
        let output = Command::new(program).args(args).output()?;
        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Expected validator location under `skills_root`.
pub fn validator_path(skills_root: &Path) -> PathBuf {
    VALIDATOR_COMPONENTS
        .iter()
        .fold(skills_root.to_path_buf(), |path, part| path.join(part))
}

/// Run the validator once per manifest's skill directory.
///
/// A missing validator yields a single issue and nothing else runs. Each
/// non-zero exit yields an issue carrying the trimmed stdout+stderr. A skill
/// whose validator cannot be launched is reported and the rest still run.
///
/// `interpreter` may carry extra words (`"uv run python"`); `None` executes
/// the validator directly.
pub fn run_delegated_validator(
    skills_root: &Path,
    manifests: &[PathBuf],
    interpreter: Option<&str>,
    runner: &dyn CommandRunner,
) -> Vec<Issue> {
    let validator = validator_path(skills_root);
    if !validator.exists() {
        tracing::warn!(validator = %validator.display(), "Validator script not found");
        return vec![Issue::ValidatorMissing { validator }];
    }

    let mut issues = Vec::new();
    for manifest in manifests {
        let skill_dir = manifest.parent().unwrap_or(skills_root).to_path_buf();
        let (program, args) = validator_command(interpreter, &validator, &skill_dir);

        tracing::debug!(skill_dir = %skill_dir.display(), "Running quick_validate");
        match runner.run(&program, &args) {
            Ok(output) if output.success => {}
            Ok(output) => {
                let details = format!("{}{}", output.stdout, output.stderr)
                    .trim()
                    .to_string();
                issues.push(Issue::ValidatorFailed { skill_dir, details });
            }
            Err(e) => {
                tracing::warn!(
                    skill_dir = %skill_dir.display(),
                    program = %program.to_string_lossy(),
                    "Failed to launch validator: {e}"
                );
                issues.push(Issue::ValidatorLaunchFailed {
                    skill_dir,
                    error: e.to_string(),
                });
            }
        }
    }

    issues
}

fn validator_command(
    interpreter: Option<&str>,
    validator: &Path,
    skill_dir: &Path,
) -> (OsString, Vec<OsString>) {
    let mut words = interpreter
        .map(|i| i.split_whitespace().map(OsString::from).collect::<Vec<_>>())
        .unwrap_or_default();

    if words.is_empty() {
        return (
            validator.as_os_str().to_owned(),
            vec![skill_dir.as_os_str().to_owned()],
        );
    }

    let program = words.remove(0);
    words.push(validator.as_os_str().to_owned());
    words.push(skill_dir.as_os_str().to_owned());
    (program, words)
}
