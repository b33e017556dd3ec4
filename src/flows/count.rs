//! Count flow - Runs the whole pipeline over one file
//!
//! read → tokenize → accumulate → filter → rank → render. Nothing reaches
//! stdout until the result has been rendered in full, so a failed run never
//! leaves partial output behind.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;
use std::path::PathBuf;

use crate::core::file_reader::{read_text, EncodingStrategy};
use crate::core::model::{CountMap, CountRange, RankedList};
use crate::core::render::{RenderConfig, Renderer};
use crate::pipeline::accumulate::accumulate;
use crate::pipeline::filter::filter;
use crate::pipeline::rank::rank;
use crate::pipeline::tokenize::tokenize_lines;

/// Everything a run needs, resolved from the command line in one step
#[derive(Debug, Clone)]
pub struct CountConfig {
    pub path: PathBuf,
    pub range: CountRange,
    /// Keep only the first N ranked entries
    pub top: Option<usize>,
    pub encoding: EncodingStrategy,
    pub render: RenderConfig,
    /// Print a run summary to stderr
    pub stats: bool,
}

impl CountConfig {
    pub fn new(path: impl Into<PathBuf>, range: CountRange) -> Self {
        Self {
            path: path.into(),
            range,
            top: None,
            encoding: EncodingStrategy::default(),
            render: RenderConfig::default(),
            stats: false,
        }
    }
}

/// Summary of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountStats {
    /// Lines read
    pub lines: usize,
    /// Tokens produced across all lines
    pub tokens: u64,
    /// Distinct tokens before filtering
    pub distinct: usize,
    /// Distinct tokens inside the range
    pub retained: usize,
    /// Entries written (after --top)
    pub emitted: usize,
    /// Whether invalid UTF-8 was replaced
    pub lossy: bool,
}

/// Count the words of `text` and rank those whose count lies in `range`
pub fn count_text(text: &str, range: CountRange, top: Option<usize>) -> (RankedList, CountStats) {
    let mut stats = CountStats::default();

    let lines: Vec<&str> = text.lines().collect();
    stats.lines = lines.len();
    let counts = accumulate(tokenize_lines(lines), CountMap::new());
    if counts.is_empty() {
        debug!("no tokens found");
    }
    stats.tokens = counts.total();
    stats.distinct = counts.len();
    debug!(
        "tokenized {} lines into {} tokens ({} distinct)",
        stats.lines, stats.tokens, stats.distinct
    );

    let filtered = filter(counts, range);
    stats.retained = filtered.len();
    debug!(
        "{} words with count in [{}, {}]",
        stats.retained, range.lower, range.upper
    );

    let mut ranked = rank(&filtered);
    if let Some(n) = top {
        ranked.truncate(n);
    }
    stats.emitted = ranked.len();

    (ranked, stats)
}

/// Run the count flow and write the rendered result to stdout
pub fn run_count(config: &CountConfig) -> Result<CountStats> {
    let stdout = std::io::stdout();
    run_count_to(config, stdout.lock())
}

/// Run the count flow against an arbitrary writer
pub fn run_count_to<W: Write>(config: &CountConfig, mut writer: W) -> Result<CountStats> {
    info!("counting words in {}", config.path.display());

    let text = read_text(&config.path, config.encoding)?;
    let (ranked, mut stats) = count_text(&text.content, config.range, config.top);
    stats.lossy = text.lossy_conversion;

    let renderer = Renderer::with_config(config.render);
    let mut rendered = Vec::new();
    renderer
        .render_to(&ranked, &mut rendered)
        .context("Failed to render word counts")?;
    writer
        .write_all(&rendered)
        .and_then(|_| writer.flush())
        .context("Failed to write output")?;

    if config.stats {
        print_stats(&stats, config.range);
    }

    Ok(stats)
}

fn print_stats(stats: &CountStats, range: CountRange) {
    eprintln!("Word Count Statistics:");
    eprintln!("   Lines: {}", stats.lines);
    eprintln!("   Tokens: {}", stats.tokens);
    eprintln!("   Distinct words: {}", stats.distinct);
    eprintln!(
        "   In range [{}, {}]: {}",
        range.lower, range.upper, stats.retained
    );
    if stats.emitted < stats.retained {
        eprintln!("   Emitted: {} (limited by --top)", stats.emitted);
    }
    if stats.lossy {
        eprintln!("   Note: invalid UTF-8 was replaced");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::WordFreqError;
    use crate::core::render::OutputFormat;
    use std::fs;
    use tempfile::tempdir;

    fn pairs(ranked: &RankedList) -> Vec<(String, u64)> {
        ranked
            .iter()
            .map(|e| (e.word().to_string(), e.count()))
            .collect()
    }

    fn run_on(content: &[u8], config: impl FnOnce(PathBuf) -> CountConfig) -> Result<String> {
        let dir = tempdir()?;
        let path = dir.path().join("input.txt");
        fs::write(&path, content)?;

        let mut out = Vec::new();
        run_count_to(&config(path), &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_ties_are_alphabetical() {
        let (ranked, _) = count_text("The cat sat. The CAT sat!", CountRange::default(), None);
        assert_eq!(
            pairs(&ranked),
            vec![
                ("cat".to_string(), 2),
                ("sat".to_string(), 2),
                ("the".to_string(), 2)
            ]
        );
    }

    #[test]
    fn test_lower_bound_only() {
        let (ranked, _) = count_text("a a a b b c", CountRange::new(2, 1_000_000), None);
        assert_eq!(pairs(&ranked), vec![("a".to_string(), 3), ("b".to_string(), 2)]);
    }

    #[test]
    fn test_both_bounds() {
        let (ranked, _) = count_text("a a a b b c", CountRange::new(1, 2), None);
        assert_eq!(pairs(&ranked), vec![("b".to_string(), 2), ("c".to_string(), 1)]);
    }

    #[test]
    fn test_counts_span_lines() {
        let (ranked, stats) = count_text("a b\n\nB a\nA\n", CountRange::default(), None);
        assert_eq!(pairs(&ranked), vec![("a".to_string(), 3), ("b".to_string(), 2)]);
        assert_eq!(stats.lines, 4);
        assert_eq!(stats.tokens, 5);
    }

    #[test]
    fn test_stats() {
        let (_, stats) = count_text("a a a b b c", CountRange::new(2, 2), None);
        assert_eq!(
            stats,
            CountStats {
                lines: 1,
                tokens: 6,
                distinct: 3,
                retained: 1,
                emitted: 1,
                lossy: false,
            }
        );
    }

    #[test]
    fn test_top_limits_after_ranking() {
        let (ranked, stats) = count_text("c c c b b a d", CountRange::default(), Some(2));
        assert_eq!(pairs(&ranked), vec![("c".to_string(), 3), ("b".to_string(), 2)]);
        assert_eq!(stats.retained, 4);
        assert_eq!(stats.emitted, 2);
    }

    #[test]
    fn test_empty_text() {
        let (ranked, stats) = count_text("", CountRange::default(), None);
        assert!(ranked.is_empty());
        assert_eq!(stats, CountStats::default());
    }

    #[test]
    fn test_run_writes_single_json_line() {
        let out = run_on(b"a a a b b c", |p| CountConfig::new(p, CountRange::new(2, 1_000_000))).unwrap();
        assert_eq!(out, "[[\"a\",3],[\"b\",2]]\n");
    }

    #[test]
    fn test_run_empty_file() {
        let out = run_on(b"", |p| CountConfig::new(p, CountRange::default())).unwrap();
        assert_eq!(out, "[]\n");
    }

    #[test]
    fn test_run_greek_is_not_escaped() {
        let out = run_on("ὁ λόγος ὁ".as_bytes(), |p| CountConfig::new(p, CountRange::default())).unwrap();
        assert_eq!(out, "[[\"ὁ\",2],[\"λόγος\",1]]\n");
    }

    #[test]
    fn test_run_tsv_format() {
        let out = run_on(b"x y x", |p| {
            let mut config = CountConfig::new(p, CountRange::default());
            config.render = RenderConfig::new(OutputFormat::Tsv);
            config
        })
        .unwrap();
        assert_eq!(out, "x\t2\ny\t1\n");
    }

    #[test]
    fn test_run_invalid_utf8_writes_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, b"ok \xff").unwrap();

        let mut out = Vec::new();
        let err = run_count_to(&CountConfig::new(&path, CountRange::default()), &mut out).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<WordFreqError>(),
            Some(WordFreqError::Decoding { .. })
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_lossy() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, b"ok ok \xff").unwrap();

        let mut config = CountConfig::new(&path, CountRange::default());
        config.encoding = EncodingStrategy::Lossy;
        let mut out = Vec::new();
        let stats = run_count_to(&config, &mut out).unwrap();

        assert!(stats.lossy);
        assert_eq!(String::from_utf8(out).unwrap(), "[[\"ok\",2],[\"\u{FFFD}\",1]]\n");
    }

    #[test]
    fn test_run_missing_file() {
        let dir = tempdir().unwrap();
        let mut out = Vec::new();
        let err = run_count_to(
            &CountConfig::new(dir.path().join("missing.txt"), CountRange::default()),
            &mut out,
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<WordFreqError>(),
            Some(WordFreqError::NotFound { .. })
        ));
        assert!(out.is_empty());
    }
}
