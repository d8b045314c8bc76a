//! Tree traversal
//!
//! Uses walkdir to visit every regular file under the root, one at a time.
//! The first error aborts the run; files already visited stay rewritten.

use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use crate::core::error::RewriteError;
use crate::core::model::{FileReport, Report};
use crate::core::paths::{make_relative, normalize_path};
use crate::rewrite::file::rewrite_file;
use crate::rewrite::rule::IncludeRule;

/// Rewrite every file under `root`
pub fn rewrite_tree(root: &Path, rule: &IncludeRule) -> Result<Report, RewriteError> {
    rewrite_tree_with(root, rule, |_| {})
}

/// Rewrite every file under `root`, calling `on_file` after each one is written
pub fn rewrite_tree_with<F>(
    root: &Path,
    rule: &IncludeRule,
    mut on_file: F,
) -> Result<Report, RewriteError>
where
    F: FnMut(&FileReport),
{
    let mut report = Report::new();

    let walker = WalkDir::new(root).follow_links(false).sort_by_file_name();
    for entry in walker {
        let entry = entry.map_err(|source| RewriteError::Walk {
            path: source
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf()),
            source,
        })?;

        if !is_regular_file(&entry) {
            continue;
        }

        let path = entry.path();
        let rewritten = rewrite_file(path, rule)?;

        let file = FileReport::new(report_path(path, root), rewritten.lines, rewritten.rewrites);
        on_file(&file);
        report.push(file);
    }

    Ok(report)
}

/// Regular files, and symlinks that do not point at a directory.
///
/// Dangling links are included so that reading them fails the run.
fn is_regular_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && !entry.path().is_dir())
}

fn report_path(path: &Path, root: &Path) -> String {
    match make_relative(path, root) {
        Some(relative) if !relative.is_empty() => relative,
        _ => normalize_path(path),
    }
}
