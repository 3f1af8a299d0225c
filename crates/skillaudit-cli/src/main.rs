use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use skillaudit_checks::{SystemRunner, run_audit};
use skillaudit_config::{AuditSettings, Overrides};

#[derive(Parser)]
#[command(
    name = "skillaudit",
    about = "Audit local skills and agent prompt docs for common reliability issues"
)]
struct Cli {
    /// Path to the local skills directory (default: ~/.codex/skills)
    #[arg(long)]
    skills_root: Option<String>,

    /// Path to the local agent prompt repository (default: this repository)
    #[arg(long)]
    agent_root: Option<String>,

    /// Interpreter for the delegated validator; pass "" to execute it directly
    #[arg(long)]
    interpreter: Option<String>,

    /// Config file (default: ~/.skillaudit/config.json5)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            skills_root: self.skills_root.clone(),
            agent_root: self.agent_root.clone(),
            validator_interpreter: self.interpreter.clone(),
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = skillaudit_config::load_config(cli.config.as_deref())?;
    let settings = AuditSettings::resolve(&config, &cli.overrides(), |key| {
        std::env::var(key).ok()
    })?;
    tracing::debug!(?settings, "Resolved settings");

    let report = run_audit(&settings, &SystemRunner);
    print!("{}", report.render());

    Ok(ExitCode::from(report.exit_code()))
}
