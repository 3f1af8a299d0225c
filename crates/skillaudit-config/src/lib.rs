//! skillaudit-config: where the audit looks, and with what interpreter.
//!
//! Settings are layered (highest priority first): explicit overrides from the
//! command line, `SKILLAUDIT_*` environment variables (a `.env` file is
//! honored), the JSON5 config file at `~/.skillaudit/config.json5`, and
//! built-in defaults.

pub mod paths;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use paths::{expand_home, normalize_path, resolve_lenient, resolve_path};

/// Environment variable overriding the skills root.
pub const ENV_SKILLS_ROOT: &str = "SKILLAUDIT_SKILLS_ROOT";
/// Environment variable overriding the agent prompt root.
pub const ENV_AGENT_ROOT: &str = "SKILLAUDIT_AGENT_ROOT";
/// Environment variable overriding the validator interpreter.
pub const ENV_INTERPRETER: &str = "SKILLAUDIT_INTERPRETER";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON5 parse error: {0}")]
    Json5(#[from] json5::Error),
    #[error("Home directory not found")]
    NoDirFound,
}

/// On-disk configuration. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Directory holding the skill packages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills_root: Option<String>,
    /// Directory holding the agent prompt docs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_root: Option<String>,
    /// Program used to launch the delegated validator (empty = run it directly).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validator_interpreter: Option<String>,
}

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub skills_root: Option<String>,
    pub agent_root: Option<String>,
    pub validator_interpreter: Option<String>,
}

/// Fully resolved settings for one audit run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditSettings {
    /// Absolute skills root.
    pub skills_root: PathBuf,
    /// Absolute agent prompt root.
    pub agent_root: PathBuf,
    /// Interpreter for the validator; `None` executes the validator itself.
    pub validator_interpreter: Option<String>,
}

fn default_interpreter() -> String {
    "python3".to_string()
}

/// Default skills root (`~/.codex/skills`).
pub fn default_skills_root() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|h| h.join(".codex").join("skills"))
        .ok_or(ConfigError::NoDirFound)
}

/// Default agent root: the repository the running binary sits in.
///
/// That is the nearest ancestor of the executable holding a `Cargo.toml`
/// (`<repo>/target/release/skillaudit` gives `<repo>`). An executable outside
/// any repository falls back to the repository it was built from.
pub fn default_agent_root() -> PathBuf {
    let from_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| repository_root_of(&exe));
    let root = from_exe.unwrap_or_else(|| {
        resolve_path(&Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join(".."))
    });

    if !root.is_dir() {
        tracing::warn!(
            agent_root = %root.display(),
            "Default agent root does not exist; pass --agent-root"
        );
    }
    root
}

/// Nearest ancestor of `path` (excluding itself) that contains a `Cargo.toml`.
fn repository_root_of(path: &Path) -> Option<PathBuf> {
    let path = resolve_path(path);
    path.ancestors()
        .skip(1)
        .find(|dir| dir.join("Cargo.toml").is_file())
        .map(Path::to_path_buf)
}

/// Resolve the skillaudit config directory (~/.skillaudit/).
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|h| h.join(".skillaudit"))
        .ok_or(ConfigError::NoDirFound)
}

/// Resolve the config file path (~/.skillaudit/config.json5).
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.json5"))
}

/// Load configuration from `path`, or from the default path when `None`.
pub fn load_config(path: Option<&Path>) -> Result<AuditConfig, ConfigError> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    match path {
        Some(path) => load_config_from(path),
        None => load_config_from(&config_file_path()?),
    }
}

/// Load configuration from a specific path, falling back to defaults if not found.
pub fn load_config_from(path: &Path) -> Result<AuditConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("Config file not found at {}, using defaults", path.display());
        return Ok(AuditConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: AuditConfig = json5::from_str(&content)?;
    Ok(config)
}

impl AuditSettings {
    /// Layer overrides, environment and file config over the defaults.
    ///
    /// `env` looks up an environment variable; pass `|k| std::env::var(k).ok()`
    /// for the real process environment.
    pub fn resolve(
        config: &AuditConfig,
        overrides: &Overrides,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let pick = |flag: &Option<String>, var: &str, file: &Option<String>| {
            flag.clone().or_else(|| env(var)).or_else(|| file.clone())
        };

        let skills_root = match pick(&overrides.skills_root, ENV_SKILLS_ROOT, &config.skills_root)
        {
            Some(raw) => expand_home(&raw),
            None => default_skills_root()?,
        };
        let agent_root = match pick(&overrides.agent_root, ENV_AGENT_ROOT, &config.agent_root) {
            Some(raw) => expand_home(&raw),
            None => default_agent_root(),
        };
        let interpreter = pick(
            &overrides.validator_interpreter,
            ENV_INTERPRETER,
            &config.validator_interpreter,
        )
        .unwrap_or_else(default_interpreter);

        Ok(Self {
            skills_root: resolve_path(&skills_root),
            agent_root: resolve_path(&agent_root),
            validator_interpreter: Some(interpreter.trim().to_string()).filter(|i| !i.is_empty()),
        })
    }
}
