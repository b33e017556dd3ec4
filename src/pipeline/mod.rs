//! Pipeline module - The pure stages of a word count run
//!
//! Provides:
//! - tokenize: Line to lowercase, punctuation-free tokens
//! - accumulate: Fold tokens into a CountMap
//! - filter: Keep entries whose count is in a CountRange
//! - rank: Order entries by count, then word

pub mod accumulate;
pub mod filter;
pub mod rank;
pub mod tokenize;
