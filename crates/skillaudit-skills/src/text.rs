//! Tolerant text reads.

use std::path::Path;

/// Read a document as text, never failing.
///
/// Invalid UTF-8 is replaced and line endings are normalized to `\n`.
/// An unreadable file yields an empty string.
pub fn read_text(path: &Path) -> String {
    match std::fs::read(path) {
        Ok(bytes) => normalize_newlines(&String::from_utf8_lossy(&bytes)),
        Err(e) => {
            tracing::warn!(path = %path.display(), "Failed to read file: {e}");
            String::new()
        }
    }
}

fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
