//! Shebang scripts must be executable.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use skillaudit_types::Issue;

const SHEBANG: &[u8] = b"#!";

/// Flag `path` if its first line starts with `#!` and it is not executable.
///
/// Directories and missing paths are skipped silently. Only the first line
/// is read.
pub fn check_script_exec_bit(path: &Path) -> Option<Issue> {
    if !path.is_file() {
        return None;
    }

    let first_line = match read_first_line(path) {
        Ok(line) => line,
        Err(e) => {
            tracing::warn!(path = %path.display(), "Failed to read script: {e}");
            return None;
        }
    };

    if first_line.starts_with(SHEBANG) && !is_executable(path) {
        return Some(Issue::ScriptNotExecutable {
            script: path.to_path_buf(),
        });
    }
    None
}

fn read_first_line(path: &Path) -> std::io::Result<Vec<u8>> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut line = Vec::new();
    reader.read_until(b'\n', &mut line)?;
    Ok(line)
}

/// Whether the user running the audit may execute `path` (`access(2)` with `X_OK`).
#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use nix::unistd::{AccessFlags, access};

    access(path, AccessFlags::X_OK).is_ok()
}

// No permission bits to inspect.
#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    true
}
