//! incfix - rewrite namespaced angle-bracket includes across a source tree
//!
//! incfix provides:
//! - Recursive, sequential traversal of a source directory
//! - Line-level rewriting of `#include <ns/path>` into `#include "path"`
//! - Optional run reports (jsonl/json/md)

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod rewrite;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
