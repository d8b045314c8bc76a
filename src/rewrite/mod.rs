//! Rewrite module - Include directive rewriting
//!
//! - rule: the per-line match and transform
//! - file: read, transform and write back a single file
//! - walk: sequential traversal of a directory tree

pub mod file;
pub mod rule;
pub mod walk;
