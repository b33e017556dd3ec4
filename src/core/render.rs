//! Renderer module
//!
//! Renders a RankedList to different output formats: json, jsonl, md, tsv

use std::io::Write;
use unicode_width::UnicodeWidthStr;

use crate::core::model::{RankedList, WordCount};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Jsonl,
    Markdown,
    Tsv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "jsonl" => Ok(OutputFormat::Jsonl),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            "tsv" => Ok(OutputFormat::Tsv),
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
    #[allow(dead_code)]
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

/// Renderer for ranked word lists
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

    /// Render a ranked list to a string, without a trailing newline
    pub fn render(&self, ranked: &RankedList) -> serde_json::Result<String> {
        match self.config.format {
            OutputFormat::Json => self.render_json(ranked),
            OutputFormat::Jsonl => self.render_jsonl(ranked),
            OutputFormat::Markdown => Ok(self.render_markdown(ranked)),
            OutputFormat::Tsv => Ok(self.render_tsv(ranked)),
        }
    }

    /// Render to a writer, terminating the output with a newline
    pub fn render_to<W: Write>(&self, ranked: &RankedList, mut writer: W) -> std::io::Result<()> {
        let output = self.render(ranked)?;
        if !output.is_empty() {
            writer.write_all(output.as_bytes())?;
            writer.write_all(b"\n")?;
        }
        writer.flush()
    }

    /// Single JSON array; non-ASCII characters are written literally
    fn render_json(&self, ranked: &RankedList) -> serde_json::Result<String> {
        if self.config.pretty {
            serde_json::to_string_pretty(ranked)
        } else {
            serde_json::to_string(ranked)
        }
    }

    /// One `[word, count]` array per line
    fn render_jsonl(&self, ranked: &RankedList) -> serde_json::Result<String> {
        let lines = ranked
            .iter()
            .map(|entry| {
                if self.config.pretty {
                    serde_json::to_string_pretty(entry)
                } else {
                    serde_json::to_string(entry)
                }
            })
            .collect::<serde_json::Result<Vec<_>>>()?;
        Ok(lines.join("\n"))
    }

    fn render_markdown(&self, ranked: &RankedList) -> String {
        if ranked.is_empty() {
            return String::new();
        }

        let word_width = ranked
            .iter()
            .map(|e| e.word().width())
            .max()
            .unwrap_or(0)
            .max("Word".len());
        let count_width = ranked
            .iter()
            .map(|e| e.count().to_string().len())
            .max()
            .unwrap_or(0)
            .max("Count".len());

        let mut output = String::new();
        output.push_str(&format!(
            "| {} | {} |\n",
            pad_right("Word", word_width),
            pad_left("Count", count_width)
        ));
        output.push_str(&format!(
            "| {} | {}: |\n",
            "-".repeat(word_width),
            "-".repeat(count_width.saturating_sub(1))
        ));
        for entry in ranked {
            self.render_row_md(&mut output, entry, word_width, count_width);
        }
        output.pop();
        output
    }

    fn render_row_md(&self, output: &mut String, entry: &WordCount, word_width: usize, count_width: usize) {
        output.push_str(&format!(
            "| {} | {} |\n",
            pad_right(entry.word(), word_width),
            pad_left(&entry.count().to_string(), count_width)
        ));
    }

    fn render_tsv(&self, ranked: &RankedList) -> String {
        ranked
            .iter()
            .map(|e| format!("{}\t{}", e.word(), e.count()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", " ".repeat(fill), s)
}
