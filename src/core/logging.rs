//! Stderr diagnostics
//!
//! stdout carries only the rendered result, so every log line goes to stderr.

use log::LevelFilter;

/// How chatty diagnostics should be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Verbosity::Quiet,
            (false, true) => Verbosity::Verbose,
            (false, false) => Verbosity::Normal,
        }
    }

    pub fn level(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Error,
            Verbosity::Normal => LevelFilter::Warn,
            Verbosity::Verbose => LevelFilter::Debug,
        }
    }
}

/// Install the global logger. Safe to call more than once.
pub fn init(verbosity: Verbosity) {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(verbosity.level());
    let _ = builder.try_init();
}
