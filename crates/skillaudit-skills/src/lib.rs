//! skillaudit-skills: reading skill packages off disk.
//!
//! A skill is a directory holding a `SKILL.md` manifest whose frontmatter
//! names and describes it, plus optional helper scripts:
//!
//! ```text
//! my-skill/
//! ├── SKILL.md
//! └── scripts/
//!     └── run.sh
//! ```
//!
//! ```markdown
//! ---
//! name: my-skill
//! description: What the skill does and when to use it
//! ---
//!
//! # My Skill
//! ```

pub mod discovery;
pub mod frontmatter;
pub mod text;

pub use discovery::{MANIFEST_FILE_NAME, discover_manifests, discover_markdown, discover_scripts};
pub use frontmatter::{ManifestFrontmatter, parse_frontmatter};
pub use text::read_text;
