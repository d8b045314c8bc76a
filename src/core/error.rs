//! Typed errors for the rewrite engine
//!
//! The CLI wraps these with `anyhow` context at the boundary.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
    #[error("Failed to walk directory: {path}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read file: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File is not valid UTF-8 text: {path}")]
    NotText { path: PathBuf },

    #[error("Failed to write file: {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
