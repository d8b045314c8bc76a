//! Report model
//!
//! The rewrite engine maps every visited file to a `FileReport` before
//! anything is rendered.

use serde::{Deserialize, Serialize};

/// A single rewritten line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRewrite {
    /// 1-indexed line number
    pub line: u32,

    /// Original text, without line ending
    pub before: String,

    /// Replacement text, without line ending
    pub after: String,
}

/// Outcome for one visited file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    /// Path relative to root, using '/' as separator
    pub path: String,

    /// Number of lines in the file
    pub lines: u32,

    /// Lines that were rewritten, in file order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rewrites: Vec<LineRewrite>,
}

impl FileReport {
    pub fn new(path: impl Into<String>, lines: u32, rewrites: Vec<LineRewrite>) -> Self {
        Self {
            path: path.into(),
            lines,
            rewrites,
        }
    }

    pub fn changed(&self) -> bool {
        !self.rewrites.is_empty()
    }
}

/// Totals over a whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub files_visited: usize,
    pub files_changed: usize,
    pub lines_rewritten: usize,
}

/// Report for a full tree run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Report {
    pub files: Vec<FileReport>,
}

impl Report {
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    pub fn push(&mut self, file: FileReport) {
        self.files.push(file);
    }

    pub fn totals(&self) -> Totals {
        self.files.iter().fold(Totals::default(), |mut t, f| {
            t.files_visited += 1;
            if f.changed() {
                t.files_changed += 1;
            }
            t.lines_rewritten += f.rewrites.len();
            t
        })
    }

    /// Files with at least one rewritten line
    pub fn changed_files(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| f.changed())
    }
}

impl FromIterator<FileReport> for Report {
    fn from_iter<T: IntoIterator<Item = FileReport>>(iter: T) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}
