//! Renderer module
//!
//! Renders a RewriteReport to different output formats: jsonl, json, md, raw

use crate::core::model::RewriteReport;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jsonl,
    Json,
    Markdown,
    Raw,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            "raw" => Ok(OutputFormat::Raw),
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
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for run reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn format(&self) -> OutputFormat {
        self.config.format
    }

    /// Render a report to a string
    pub fn render(&self, report: &RewriteReport) -> String {
        match self.config.format {
            OutputFormat::Jsonl => self.render_jsonl(report),
            OutputFormat::Json => self.render_json(report),
            OutputFormat::Markdown => self.render_markdown(report),
            OutputFormat::Raw => self.render_raw(report),
        }
    }

    fn render_jsonl(&self, report: &RewriteReport) -> String {
        let rendered = if self.config.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        };
        rendered.unwrap_or_default()
    }

    /// Render as a single JSON array
    fn render_json(&self, report: &RewriteReport) -> String {
        let items = std::slice::from_ref(report);
        let rendered = if self.config.pretty {
            serde_json::to_string_pretty(items)
        } else {
            serde_json::to_string(items)
        };
        rendered.unwrap_or_else(|_| "[]".to_string())
    }

    fn render_markdown(&self, report: &RewriteReport) -> String {
        let mut output = String::new();

        output.push_str(&format!("## `{}` → `{}`\n\n", report.input, report.output));
        output.push_str("| Field | Value |\n");
        output.push_str("|-------|-------|\n");
        output.push_str(&format!("| Lines read | {} |\n", report.lines_read));
        output.push_str(&format!("| Blank lines | {} |\n", report.blank_lines));
        output.push_str(&format!("| Tokens | {} |\n", report.tokens));
        output.push_str(&format!("| Output lines | {} |\n", report.output_lines));
        output.push_str(&format!(
            "| Header joined | {} |\n",
            if report.header_joined { "yes" } else { "no" }
        ));
        output.push_str(&format!("| Bytes written | {} |\n", report.meta.size));
        output.push_str(&format!("| xxh3 | `{}` |\n", report.meta.hash));

        if let Some(preview) = &report.preview {
            output.push_str("\n```\n");
            output.push_str(preview);
            output.push_str("\n```\n");
        }

        if report.meta.truncated {
            output.push_str("\n> ⚠️ Preview shows only the first tokens\n");
        }

        output
    }

    /// Raw mode: just the preview text
    fn render_raw(&self, report: &RewriteReport) -> String {
        report.preview.clone().unwrap_or_default()
    }
}
