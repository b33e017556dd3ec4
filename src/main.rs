//! wordfreq - Word frequency counter for Latin- and Greek-script text
//!
//! wordfreq provides:
//! - Tokenizing into lowercase words with ASCII punctuation removed
//! - Counting occurrences and filtering by an inclusive count range
//! - Ranking by count, highest first, ties broken alphabetically
//! - Output as JSON (default), JSON Lines, Markdown or TSV

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod flows;
mod pipeline;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
