//! skillaudit-checks: the audit engine.
//!
//! Each check is a plain function from a path to the [`Issue`]s it finds.
//! [`run_audit`] runs them in a fixed order over the skills root and the agent
//! prompt root and collects everything into one [`AuditReport`].
//!
//! | Check                  | Applies to                          |
//! |------------------------|-------------------------------------|
//! | frontmatter            | every `SKILL.md`                    |
//! | links                  | every `SKILL.md`, every agent `*.md`|
//! | exec bits              | every entry in a `scripts/` dir     |
//! | delegated validator    | every skill directory               |
//! | agent doc phrasing     | agent `README.md`, orchestrator     |
//!
//! [`Issue`]: skillaudit_types::Issue
//! [`AuditReport`]: skillaudit_types::AuditReport

pub mod agent_docs;
pub mod audit;
pub mod exec_bits;
pub mod links;
pub mod validator;

pub use agent_docs::check_agent_docs;
pub use audit::run_audit;
pub use exec_bits::check_script_exec_bit;
pub use links::check_markdown_links;
pub use validator::{CommandOutput, CommandRunner, SystemRunner, run_delegated_validator};
