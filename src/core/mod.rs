//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Word count model (CountMap, CountRange, RankedList)
//! - Typed errors
//! - Rendering functions for different output formats
//! - File reading with UTF-8 decoding strategies
//! - Stderr logging setup

pub mod error;
pub mod file_reader;
pub mod logging;
pub mod model;
pub mod render;
