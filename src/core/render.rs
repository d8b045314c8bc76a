//! Renderer module
//!
//! Renders a run `Report` to jsonl, json or md.

use crate::core::model::Report;
use serde::Serialize;
use std::io::Write;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jsonl,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// JSON document shape: every file plus run totals
#[derive(Serialize)]
struct JsonDocument<'a> {
    files: &'a [crate::core::model::FileReport],
    totals: crate::core::model::Totals,
}

/// Renderer for reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            config: RenderConfig::new(format),
        }
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a report to a string
    pub fn render(&self, report: &Report) -> String {
        match self.config.format {
            OutputFormat::Jsonl => self.render_jsonl(report),
            OutputFormat::Json => self.render_json(report),
            OutputFormat::Markdown => self.render_markdown(report),
        }
    }

    /// Render to a writer, with a trailing newline
    pub fn render_to<W: Write>(&self, report: &Report, mut writer: W) -> std::io::Result<()> {
        let output = self.render(report);
        writer.write_all(output.as_bytes())?;
        if !output.is_empty() && !output.ends_with('\n') {
            writer.write_all(b"\n")?;
        }
        Ok(())
    }

    /// One JSON object per visited file
    fn render_jsonl(&self, report: &Report) -> String {
        report
            .files
            .iter()
            .filter_map(|file| {
                if self.config.pretty {
                    serde_json::to_string_pretty(file).ok()
                } else {
                    serde_json::to_string(file).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    fn render_json(&self, report: &Report) -> String {
        let doc = JsonDocument {
            files: &report.files,
            totals: report.totals(),
        };
        let rendered = if self.config.pretty {
            serde_json::to_string_pretty(&doc)
        } else {
            serde_json::to_string(&doc)
        };
        rendered.unwrap_or_else(|_| "{}".to_string())
    }

    /// Markdown: a summary followed by one section per changed file
    fn render_markdown(&self, report: &Report) -> String {
        let totals = report.totals();
        let mut output = String::new();

        output.push_str("## Summary\n\n");
        output.push_str(&format!("- Files visited: {}\n", totals.files_visited));
        output.push_str(&format!("- Files changed: {}\n", totals.files_changed));
        output.push_str(&format!("- Lines rewritten: {}\n", totals.lines_rewritten));
        output.push('\n');

        let changed: Vec<_> = report.changed_files().collect();
        if changed.is_empty() {
            return output;
        }

        output.push_str("## Rewrites\n\n");
        for file in changed {
            output.push_str(&format!("### `{}`\n\n", file.path));
            output.push_str("```diff\n");
            for rewrite in &file.rewrites {
                output.push_str(&format!("@@ line {} @@\n", rewrite.line));
                output.push_str(&format!("-{}\n", rewrite.before));
                output.push_str(&format!("+{}\n", rewrite.after));
            }
            output.push_str("```\n\n");
        }

        output
    }
}
