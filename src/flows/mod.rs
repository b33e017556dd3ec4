//! Flows module - Operations that tie I/O to the pipeline
//!
//! Provides:
//! - count: Read a file, count and rank its words, render the result

pub mod count;
