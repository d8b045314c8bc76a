//! Per-file rewrite: read fully, transform every line, write back fully

use std::fs;
use std::path::Path;

use crate::core::error::RewriteError;
use crate::core::model::LineRewrite;
use crate::rewrite::rule::{split_line_ending, IncludeRule};

/// Result of applying a rule to one buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten {
    /// Full new content (identical to the input when nothing matched)
    pub content: String,

    /// Number of lines in the input
    pub lines: u32,

    pub rewrites: Vec<LineRewrite>,
}

/// Apply the rule to every line of `content`.
///
/// Unmatched lines are copied byte-for-byte, line endings included.
pub fn rewrite_content(content: &str, rule: &IncludeRule) -> Rewritten {
    let mut output = String::with_capacity(content.len());
    let mut rewrites = Vec::new();
    let mut lines = 0u32;

    for (idx, line) in content.split_inclusive('\n').enumerate() {
        lines += 1;
        match rule.rewrite_line(line) {
            Some(new_line) => {
                rewrites.push(LineRewrite {
                    line: idx as u32 + 1,
                    before: split_line_ending(line).0.to_string(),
                    after: split_line_ending(&new_line).0.to_string(),
                });
                output.push_str(&new_line);
            }
            None => output.push_str(line),
        }
    }

    Rewritten {
        content: output,
        lines,
        rewrites,
    }
}

/// Rewrite a file in place.
///
/// The file is written back even when no line matched.
pub fn rewrite_file(path: &Path, rule: &IncludeRule) -> Result<Rewritten, RewriteError> {
    let bytes = fs::read(path).map_err(|source| RewriteError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8(bytes).map_err(|_| RewriteError::NotText {
        path: path.to_path_buf(),
    })?;

    let rewritten = rewrite_content(&content, rule);

    fs::write(path, &rewritten.content).map_err(|source| RewriteError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(rewritten)
}
