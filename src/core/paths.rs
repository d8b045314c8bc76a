//! Path normalization utilities
//!
//! Include tokens and report paths always use '/' as separator.

use std::path::Path;

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Normalize an include path token lexically.
///
/// Repeated separators and `.` components are dropped, `..` is kept as-is,
/// and nothing is resolved against the filesystem. An empty result is `.`.
pub fn normalize_include_path(token: &str) -> String {
    let unified = token.replace('\\', "/");
    let absolute = unified.starts_with('/');

    let parts: Vec<&str> = unified
        .split('/')
        .filter(|part| !part.is_empty() && *part != ".")
        .collect();

    let joined = parts.join("/");
    match (absolute, joined.is_empty()) {
        (true, _) => format!("/{}", joined),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}
