//! Relative link checking for markdown documents.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use skillaudit_config::resolve_lenient;
use skillaudit_skills::read_text;
use skillaudit_types::Issue;

/// Inline `[label](target)`; the target ends at the first `)`.
static MD_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[[^\]]+\]\(([^)]+)\)").expect("link pattern is valid"));

/// Targets with these prefixes are never resolved on disk.
const EXTERNAL_PREFIXES: [&str; 4] = ["http://", "https://", "#", "mailto:"];

/// Report every local link in `document` whose target does not exist.
pub fn check_markdown_links(document: &Path) -> Vec<Issue> {
    let text = read_text(document);
    check_links_in(&text, document)
}

/// Check the links of already-loaded `text` belonging to `document`.
pub fn check_links_in(text: &str, document: &Path) -> Vec<Issue> {
    let base = document.parent().unwrap_or(Path::new(""));
    let mut issues = Vec::new();

    for cap in MD_LINK_RE.captures_iter(text) {
        let Some(raw) = cap.get(1) else { continue };
        let target = raw.as_str().trim();
        if is_external(target) {
            continue;
        }

        let resolved = resolve_lenient(&base.join(target));
        if !resolved.exists() {
            tracing::debug!(
                document = %document.display(),
                link = target,
                "Broken link"
            );
            issues.push(Issue::BrokenLink {
                target: target.to_string(),
                document: document.to_path_buf(),
            });
        }
    }

    issues
}

fn is_external(target: &str) -> bool {
    EXTERNAL_PREFIXES.iter().any(|p| target.starts_with(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_external_targets_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let doc = dir.path().join("README.md");
        let text = "[site](https://example.com) [plain](http://x.y) \
                    [anchor](#section) [mail](mailto:a@b.com)";
        assert!(check_links_in(text, &doc).is_empty());
    }

    #[test]
    fn test_local_links_resolve_relative_to_document() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("docs/guides")).unwrap();
        fs::write(root.join("docs/guides/setup.md"), "x").unwrap();
        fs::write(root.join("docs/index.md"), "x").unwrap();

        let doc = root.join("docs/guides/intro.md");
        let text = "[setup]( setup.md ) [up](../index.md) [dir](.) [via](missing/../setup.md)";
        assert!(check_links_in(text, &doc).is_empty());
    }

    #[test]
    fn test_broken_link_reported_per_occurrence() {
        let dir = tempfile::tempdir().unwrap();
        let doc = dir.path().join("SKILL.md");
        fs::write(
            &doc,
            "See [ref](references/api.md) and again [ref](references/api.md).\n",
        )
        .unwrap();

        let issues = check_markdown_links(&doc);
        assert_eq!(issues.len(), 2);
        assert_eq!(
            issues[0].to_string(),
            format!("Broken link `references/api.md` in `{}`", doc.display())
        );
        assert_eq!(issues[0], issues[1]);
    }

    #[test]
    fn test_target_stops_at_first_paren() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("file(1).md"), "x").unwrap();
        let doc = dir.path().join("doc.md");

        let issues = check_links_in("[copy](file(1).md)", &doc);
        assert_eq!(
            issues,
            vec![Issue::BrokenLink {
                target: "file(1".into(),
                document: doc.clone(),
            }]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_parent_of_symlinked_dir_follows_link() {
        let dir = tempfile::tempdir().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap();
        fs::create_dir_all(root.join("shared/refs")).unwrap();
        fs::write(root.join("shared/guide.md"), "x").unwrap();
        fs::create_dir_all(root.join("skill")).unwrap();
        std::os::unix::fs::symlink(root.join("shared/refs"), root.join("skill/refs")).unwrap();
        fs::write(root.join("skill/guide-local.md"), "x").unwrap();

        let doc = root.join("skill/SKILL.md");
        // `refs/..` lands in `shared/`, not back in `skill/`.
        let text = "[ok](refs/../guide.md) [bad](refs/../guide-local.md)";
        assert_eq!(
            check_links_in(text, &doc),
            vec![Issue::BrokenLink {
                target: "refs/../guide-local.md".into(),
                document: doc.clone(),
            }]
        );
    }

    #[test]
    fn test_fragment_on_local_link_is_part_of_target() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("guide.md"), "x").unwrap();
        let doc = dir.path().join("doc.md");

        let issues = check_links_in("[g](guide.md#usage)", &doc);
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn test_empty_label_is_not_a_link() {
        let dir = tempfile::tempdir().unwrap();
        let doc = dir.path().join("doc.md");
        assert!(check_links_in("[](nowhere.md)", &doc).is_empty());
    }
}
