//! Path expansion, resolution and lexical normalization.

use std::path::{Component, Path, PathBuf};

/// Expand a leading `~` to the user's home directory.
pub fn expand_home(raw: &str) -> PathBuf {
    if raw == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}

/// Make a path absolute.
///
/// Existing paths are canonicalized. Missing paths are joined onto the
/// current directory and normalized lexically.
pub fn resolve_path(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(e) => {
                tracing::warn!(path = %path.display(), "Cannot read current directory: {e}");
                path.to_path_buf()
            }
        }
    };

    resolve_lenient(&absolute)
}

/// Resolve symlinks along `path` as far as it exists.
///
/// Components are taken left to right; every prefix that exists is
/// canonicalized, so a `..` after a symlinked directory climbs out of the
/// link's target. Components past a missing one are kept as written, and
/// `.`/`..` are collapsed lexically.
pub fn resolve_lenient(path: &Path) -> PathBuf {
    let mut resolved = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => resolved = normalize_path(&resolved.join("..")),
            Component::Normal(part) => {
                let candidate = resolved.join(part);
                resolved = std::fs::canonicalize(&candidate).unwrap_or(candidate);
            }
            other => resolved.push(other),
        }
    }

    if resolved.as_os_str().is_empty() {
        return PathBuf::from(".");
    }
    resolved
}

/// Collapse `.` and `..` components without touching the filesystem.
///
/// `..` at the root stays at the root; leading `..` in a relative path is kept.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}
