//! Skill manifest, script and document discovery.
//!
//! Every function walks the whole tree (hidden directories included, symlinked
//! directories not followed) and returns paths sorted component-wise, so the
//! same tree always yields the same order. A missing root yields nothing.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

/// File name of a skill manifest.
pub const MANIFEST_FILE_NAME: &str = "SKILL.md";

/// Directory name holding a skill's helper scripts.
const SCRIPTS_DIR_NAME: &str = "scripts";

/// Find every `SKILL.md` under `root`.
pub fn discover_manifests(root: &Path) -> Vec<PathBuf> {
    collect_sorted(root, 1, |entry| {
        entry.file_name() == MANIFEST_FILE_NAME && entry.path().is_file()
    })
}

/// Find every entry sitting directly inside a `scripts/` directory under `root`.
///
/// Nested directories inside `scripts/` are returned as entries themselves but
/// not descended into for matching purposes.
pub fn discover_scripts(root: &Path) -> Vec<PathBuf> {
    collect_sorted(root, 2, |entry| {
        entry
            .path()
            .parent()
            .and_then(|p| p.file_name())
            .is_some_and(|n| n == SCRIPTS_DIR_NAME)
    })
}

/// Find every markdown document (`*.md`) under `root`.
pub fn discover_markdown(root: &Path) -> Vec<PathBuf> {
    collect_sorted(root, 1, |entry| {
        entry.file_name().to_string_lossy().ends_with(".md") && entry.path().is_file()
    })
}

fn collect_sorted(
    root: &Path,
    min_depth: usize,
    matches: impl Fn(&DirEntry) -> bool,
) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = WalkDir::new(root)
        .min_depth(min_depth)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!(root = %root.display(), "Skipping unreadable entry: {e}");
                None
            }
        })
        .filter(|entry| matches(entry))
        .map(DirEntry::into_path)
        .collect();

    found.sort();
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "x").unwrap();
    }

    #[test]
    fn test_discover_manifests_sorted_and_hidden() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("zeta/SKILL.md"));
        touch(&root.join("alpha/SKILL.md"));
        touch(&root.join(".system/skill-creator/SKILL.md"));
        touch(&root.join("alpha/nested/deep/SKILL.md"));
        touch(&root.join("alpha/README.md"));
        fs::create_dir_all(root.join("dir-named/SKILL.md")).unwrap();

        let found = discover_manifests(root);
        assert_eq!(
            found,
            vec![
                root.join(".system/skill-creator/SKILL.md"),
                root.join("alpha/SKILL.md"),
                root.join("alpha/nested/deep/SKILL.md"),
                root.join("zeta/SKILL.md"),
            ]
        );
    }

    #[test]
    fn test_discover_manifests_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover_manifests(&dir.path().join("does-not-exist")).is_empty());
    }

    #[test]
    fn test_discover_scripts_is_shallow() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("a/scripts/run.sh"));
        touch(&root.join("a/scripts/lib/helper.sh"));
        touch(&root.join("b/scripts/build.py"));
        touch(&root.join("b/tools/other.sh"));
        touch(&root.join("scripts/top.sh"));

        let found = discover_scripts(root);
        assert_eq!(
            found,
            vec![
                root.join("a/scripts/lib"),
                root.join("a/scripts/run.sh"),
                root.join("b/scripts/build.py"),
                root.join("scripts/top.sh"),
            ]
        );
    }

    #[test]
    fn test_root_named_scripts_is_not_a_scripts_dir() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("scripts");
        touch(&root.join("loose.sh"));
        assert!(discover_scripts(&root).is_empty());
    }

    #[test]
    fn test_discover_markdown() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("README.md"));
        touch(&root.join("prompts/agent-orchestrator.md"));
        touch(&root.join("prompts/notes.txt"));

        assert_eq!(
            discover_markdown(root),
            vec![
                root.join("README.md"),
                root.join("prompts/agent-orchestrator.md"),
            ]
        );
    }
}
