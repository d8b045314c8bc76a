//! Include rule - the per-line transform
//!
//! A line starting with `#include <NS` whose path token sits between `<NS/`
//! and the next `>` is rewritten to `#include "path"`.

use crate::core::paths::normalize_include_path;

/// Namespace rewritten when none is configured
pub const DEFAULT_NAMESPACE: &str = "pckpp";

const TERMINATOR: char = '>';

/// What to do with text following the closing `>` of a matched include
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingPolicy {
    /// Discard it (`#include <ns/a.h> // x` becomes `#include "a.h"`)
    #[default]
    Drop,
    /// Append it verbatim after the quoted include
    Keep,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeRule {
    marker: String,
    token: String,
    trailing: TrailingPolicy,
}

impl Default for IncludeRule {
    fn default() -> Self {
        Self::for_namespace(DEFAULT_NAMESPACE)
    }
}

impl IncludeRule {
    pub fn for_namespace(namespace: &str) -> Self {
        Self {
            marker: format!("#include <{}", namespace),
            token: format!("<{}/", namespace),
            trailing: TrailingPolicy::default(),
        }
    }

    pub fn with_trailing(mut self, trailing: TrailingPolicy) -> Self {
        self.trailing = trailing;
        self
    }

    /// Line prefix that selects a line for rewriting
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Rewrite a single line, including its line ending.
    ///
    /// Returns `None` when the line must be left untouched: it does not start
    /// with the marker, or the start token, terminator or path are missing.
    pub fn rewrite_line(&self, line: &str) -> Option<String> {
        if !line.starts_with(&self.marker) {
            return None;
        }

        let (body, ending) = split_line_ending(line);
        let start = body.find(&self.token)? + self.token.len();
        let len = body[start..].find(TERMINATOR)?;
        let raw = &body[start..start + len];
        if raw.is_empty() {
            return None;
        }

        let mut rewritten = format!("#include \"{}\"", normalize_include_path(raw));
        if self.trailing == TrailingPolicy::Keep {
            rewritten.push_str(&body[start + len + TERMINATOR.len_utf8()..]);
        }
        rewritten.push_str(if ending == "\r\n" { "\r\n" } else { "\n" });
        Some(rewritten)
    }
}

/// Split a line into its text and its terminator (`\r\n`, `\n` or empty)
pub fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule() -> IncludeRule {
        IncludeRule::default()
    }

    #[test]
    fn test_rewrites_nested_path() {
        assert_eq!(
            rule().rewrite_line("#include <pckpp/foo/bar.h>\n"),
            Some("#include \"foo/bar.h\"\n".to_string())
        );
    }

    #[test]
    fn test_unmatched_lines_untouched() {
        let r = rule();
        assert_eq!(r.rewrite_line("#include <vector>\n"), None);
        assert_eq!(r.rewrite_line("  #include <pckpp/a.h>\n"), None);
        assert_eq!(r.rewrite_line("// #include <pckpp/a.h>\n"), None);
        assert_eq!(r.rewrite_line("#include \"pckpp/a.h\"\n"), None);
        assert_eq!(r.rewrite_line(""), None);
    }

    #[test]
    fn test_trailing_text_dropped_by_default() {
        assert_eq!(
            rule().rewrite_line("#include <pckpp/a.h> // comment\n"),
            Some("#include \"a.h\"\n".to_string())
        );
    }

    #[test]
    fn test_trailing_text_kept_on_request() {
        let r = rule().with_trailing(TrailingPolicy::Keep);
        assert_eq!(
            r.rewrite_line("#include <pckpp/a.h> // comment\n"),
            Some("#include \"a.h\" // comment\n".to_string())
        );
        assert_eq!(
            r.rewrite_line("#include <pckpp/a.h>\n"),
            Some("#include \"a.h\"\n".to_string())
        );
    }

    #[test]
    fn test_missing_final_newline_gains_one() {
        assert_eq!(
            rule().rewrite_line("#include <pckpp/a.h>"),
            Some("#include \"a.h\"\n".to_string())
        );
    }

    #[test]
    fn test_crlf_preserved() {
        assert_eq!(
            rule().rewrite_line("#include <pckpp/PCK/PCKFile.h>\r\n"),
            Some("#include \"PCK/PCKFile.h\"\r\n".to_string())
        );
    }

    #[test]
    fn test_path_is_normalized() {
        assert_eq!(
            rule().rewrite_line("#include <pckpp/Math//./Vec2Operators.h>\n"),
            Some("#include \"Math/Vec2Operators.h\"\n".to_string())
        );
    }

    #[test]
    fn test_malformed_matches_left_alone() {
        let r = rule();
        // marker matches but no `<pckpp/` token
        assert_eq!(r.rewrite_line("#include <pckppx.h>\n"), None);
        // no terminator
        assert_eq!(r.rewrite_line("#include <pckpp/a.h\n"), None);
        // empty path
        assert_eq!(r.rewrite_line("#include <pckpp/>\n"), None);
    }

    #[test]
    fn test_terminator_searched_after_token() {
        assert_eq!(
            rule().rewrite_line("#include <pckpp> <pckpp/b.h>\n"),
            Some("#include \"b.h\"\n".to_string())
        );
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let r = rule();
        let once = r.rewrite_line("#include <pckpp/a/b.h>\n").unwrap();
        assert_eq!(r.rewrite_line(&once), None);
    }

    #[test]
    fn test_custom_namespace() {
        let r = IncludeRule::for_namespace("engine");
        assert_eq!(r.marker(), "#include <engine");
        assert_eq!(
            r.rewrite_line("#include <engine/core/log.h>\n"),
            Some("#include \"core/log.h\"\n".to_string())
        );
        assert_eq!(r.rewrite_line("#include <pckpp/a.h>\n"), None);
    }

    #[test]
    fn test_split_line_ending() {
        assert_eq!(split_line_ending("a\r\n"), ("a", "\r\n"));
        assert_eq!(split_line_ending("a\n"), ("a", "\n"));
        assert_eq!(split_line_ending("a"), ("a", ""));
        assert_eq!(split_line_ending("\n"), ("", "\n"));
    }
}
