//! Frontmatter parser for skill manifests.

/// Marker line opening and closing the frontmatter block.
const MARKER: &str = "---";

/// The two fields a manifest must declare.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestFrontmatter {
    /// Skill name (identifier).
    pub name: Option<String>,
    /// Human-readable description.
    pub description: Option<String>,
}

impl ManifestFrontmatter {
    /// Both fields present and non-empty.
    pub fn is_complete(&self) -> bool {
        let filled = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
        filled(&self.name) && filled(&self.description)
    }
}

/// Parse the frontmatter block at the very start of `content`.
///
/// The block opens with a `---` line at offset zero and closes at the next
/// `---` line. Without a closed block both fields are `None`. Only the first
/// `name:` and `description:` lines inside the block count.
pub fn parse_frontmatter(content: &str) -> ManifestFrontmatter {
    let mut fm = ManifestFrontmatter::default();

    let Some(block) = frontmatter_block(content) else {
        return fm;
    };

    for line in block.lines() {
        let line = line.trim();
        if fm.name.is_none() {
            if let Some(value) = line.strip_prefix("name:") {
                fm.name = Some(unquote(value));
                continue;
            }
        }
        if fm.description.is_none() {
            if let Some(value) = line.strip_prefix("description:") {
                fm.description = Some(unquote(value));
            }
        }
    }

    fm
}

/// Text between the opening and closing marker lines, if both exist.
fn frontmatter_block(content: &str) -> Option<&str> {
    let rest = content.strip_prefix(MARKER)?.strip_prefix('\n')?;
    let closing = format!("\n{MARKER}\n");
    rest.find(&closing).map(|end| &rest[..end])
}

/// Trim whitespace, then surrounding double and single quotes.
fn unquote(value: &str) -> String {
    value
        .trim()
        .trim_matches('"')
        .trim_matches('\'')
        .to_string()
}
