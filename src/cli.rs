//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::Parser;
use std::num::IntErrorKind;
use std::path::PathBuf;

use crate::core::error::WordFreqError;
use crate::core::file_reader::EncodingStrategy;
use crate::core::logging::{self, Verbosity};
use crate::core::model::{CountRange, DEFAULT_LOWER, DEFAULT_UPPER};
use crate::core::render::{OutputFormat, RenderConfig};
use crate::flows::count::{run_count, CountConfig};

/// wordfreq - count word frequencies and report words within a count range.
#[derive(Parser, Debug)]
#[command(name = "wordfreq")]
#[command(
    author,
    version,
    about,
    allow_negative_numbers = true,
    long_about = r#"wordfreq counts how often each word occurs in a UTF-8 text file and prints
the words whose count lies in the inclusive range [LOWER, UPPER].

Words are lowercased and stripped of ASCII punctuation (so "don't" counts as
"dont"). Results are sorted by count, highest first, with ties in alphabetical
order.

Output formats:
- json: a single-line JSON array of [word, count] pairs (default)
- jsonl: one [word, count] pair per line
- md: Markdown table
- tsv: word<TAB>count per line

Examples:
    wordfreq book.txt
    wordfreq book.txt 5
    wordfreq book.txt 2 10 --format md
"#
)]
pub struct Cli {
    /// Text file to count (UTF-8).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Smallest count to report (inclusive, default 0).
    #[arg(
        value_name = "LOWER",
        value_parser = parse_bound,
        long_help = "Smallest count to report (inclusive).\n\n\
Defaults to 0, which reports every word."
    )]
    pub lower: Option<i64>,

    /// Largest count to report (inclusive, default 1000000).
    #[arg(
        value_name = "UPPER",
        value_parser = parse_bound,
        long_help = "Largest count to report (inclusive).\n\n\
Defaults to 1000000. If UPPER is smaller than LOWER nothing is reported."
    )]
    pub upper: Option<i64>,

    /// Output format (json/jsonl/md/tsv).
    #[arg(long, default_value = "json", value_name = "FORMAT")]
    pub format: OutputFormat,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long)]
    pub pretty: bool,

    /// Only report the N most frequent words in range.
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Replace invalid UTF-8 instead of failing.
    #[arg(
        long,
        long_help = "Decode invalid UTF-8 byte sequences as U+FFFD instead of failing.\n\n\
Without this flag a file that is not valid UTF-8 is an error."
    )]
    pub lossy: bool,

    /// Print run statistics to stderr.
    #[arg(long)]
    pub stats: bool,

    /// Quiet mode (errors only on stderr).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug diagnostics on stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }

    /// Resolve the parsed arguments into a run configuration
    pub fn into_config(self) -> CountConfig {
        let range = CountRange::new(
            self.lower.unwrap_or(DEFAULT_LOWER),
            self.upper.unwrap_or(DEFAULT_UPPER),
        );

        let mut config = CountConfig::new(self.file, range);
        config.top = self.top;
        if self.lossy {
            config.encoding = EncodingStrategy::Lossy;
        }
        config.render = RenderConfig::with_pretty(self.format, self.pretty);
        config.stats = self.stats;
        config
    }
}

/// Parse a count bound given as a base-10 integer
///
/// Integers beyond the `i64` range saturate; no count can reach them anyway.
pub fn parse_bound(s: &str) -> Result<i64, WordFreqError> {
    match s.trim().parse::<i64>() {
        Ok(bound) => Ok(bound),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(WordFreqError::BoundParse {
                value: s.to_string(),
            }),
        },
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.verbosity());

    let config = cli.into_config();
    run_count(&config)?;
    Ok(())
}
