//! CLI module - Command-line interface definitions and handler

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::io;
use std::path::PathBuf;

use crate::core::model::FileReport;
use crate::core::render::{OutputFormat, RenderConfig, Renderer};
use crate::rewrite::rule::{IncludeRule, TrailingPolicy, DEFAULT_NAMESPACE};
use crate::rewrite::walk::{rewrite_tree, rewrite_tree_with};

/// incfix - rewrite namespaced angle-bracket includes into quoted includes.
#[derive(Parser, Debug)]
#[command(name = "incfix")]
#[command(
    author,
    version,
    about,
    long_about = r#"incfix walks a source tree and rewrites every line that starts with
`#include <NS` (NS defaults to pckpp) from

    #include <pckpp/Math/Vec2.h>

to

    #include "Math/Vec2.h"

Every visited file is written back in place, whether or not it changed.
The first I/O error aborts the run.

Examples:
    incfix
    incfix --root engine/src --namespace engine
    incfix --keep-trailing --report md
"#
)]
pub struct Cli {
    /// Directory to rewrite.
    #[arg(
        long,
        env = "INCFIX_ROOT",
        default_value = "src",
        value_name = "ROOT",
        long_help = "Directory to walk recursively (defaults to ./src).\n\n\
Every regular file below it is read, rewritten and written back."
    )]
    pub root: PathBuf,

    /// Include namespace to rewrite.
    #[arg(
        long,
        env = "INCFIX_NAMESPACE",
        default_value = DEFAULT_NAMESPACE,
        value_name = "NAME",
        value_parser = clap::builder::NonEmptyStringValueParser::new(),
        long_help = "Include namespace to rewrite. Lines starting with `#include <NAME` are\n\
selected and the path between `<NAME/` and the next `>` becomes the quoted include."
    )]
    pub namespace: String,

    /// Keep text that follows the closing `>`.
    #[arg(
        long,
        env = "INCFIX_KEEP_TRAILING",
        value_parser = clap::builder::FalseyValueParser::new(),
        long_help = "Keep text that follows the closing `>` of a rewritten include, such as a\n\
trailing comment. By default it is dropped."
    )]
    pub keep_trailing: bool,

    /// Print a report of the run (jsonl/json/md).
    #[arg(
        long,
        value_name = "FORMAT",
        long_help = "Print a report of the run on stdout.\n\n\
Supported values:\n\
- jsonl: one object per visited file\n\
- json: a single document with files and totals\n\
- md (markdown): summary and per-file diffs\n\n\
Without this flag nothing is printed on stdout."
    )]
    pub report: Option<OutputFormat>,

    /// Pretty-print JSON/JSONL reports with indentation.
    #[arg(long)]
    pub pretty: bool,

    /// Verbose mode (per-file diagnostics on stderr).
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn rule(&self) -> IncludeRule {
        let trailing = if self.keep_trailing {
            TrailingPolicy::Keep
        } else {
            TrailingPolicy::Drop
        };
        IncludeRule::for_namespace(&self.namespace).with_trailing(trailing)
    }
}

/// Run the CLI
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let rule = cli.rule();
    let verbose = cli.verbose;

    if verbose {
        eprintln!(
            "{} {} (marker `{}`)",
            "scanning".cyan(),
            cli.root.display(),
            rule.marker()
        );
    }

    let report = if verbose {
        rewrite_tree_with(&cli.root, &rule, log_file)
    } else {
        rewrite_tree(&cli.root, &rule)
    }
    .with_context(|| format!("Failed to rewrite includes under {}", cli.root.display()))?;

    if verbose {
        let totals = report.totals();
        eprintln!(
            "{} {} lines in {} of {} files",
            "rewrote".green().bold(),
            totals.lines_rewritten,
            totals.files_changed,
            totals.files_visited
        );
    }

    if let Some(format) = cli.report {
        let renderer = Renderer::with_config(RenderConfig::with_pretty(format, cli.pretty));
        renderer
            .render_to(&report, io::stdout().lock())
            .context("Failed to write report")?;
    }

    Ok(())
}

fn log_file(file: &FileReport) {
    if !file.changed() {
        return;
    }
    eprintln!(
        "  {} {} ({} lines)",
        "M".yellow(),
        file.path,
        file.rewrites.len()
    );
    for rewrite in &file.rewrites {
        eprintln!("    {:>5}: {}", rewrite.line, rewrite.after.dimmed());
    }
}
