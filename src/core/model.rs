//! Word count model
//!
//! Every stage of the pipeline exchanges these types: a `CountMap` built from
//! tokens, a `CountRange` used to filter it, and the `RankedList` that is
//! finally rendered.

use serde::Serialize;
use std::collections::hash_map;
use std::collections::HashMap;

/// Default lower bound (inclusive)
pub const DEFAULT_LOWER: i64 = 0;

/// Default upper bound (inclusive), effectively unbounded for real texts
pub const DEFAULT_UPPER: i64 = 1_000_000;

/// Mapping from token to occurrence count.
///
/// Every key present has a count of at least 1. A missing key means the token
/// was never seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountMap {
    counts: HashMap<String, u64>,
}

impl CountMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more occurrence of `token`
    pub fn increment(&mut self, token: impl Into<String>) {
        *self.counts.entry(token.into()).or_insert(0) += 1;
    }

    /// Insert an entry with an explicit count. Zero counts are not stored.
    pub fn insert(&mut self, token: impl Into<String>, count: u64) {
        if count > 0 {
            self.counts.insert(token.into(), count);
        }
    }

    /// Occurrence count of `token` (0 if absent)
    #[allow(dead_code)]
    pub fn get(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, u64> {
        self.counts.iter()
    }
}

impl IntoIterator for CountMap {
    type Item = (String, u64);
    type IntoIter = hash_map::IntoIter<String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

impl<'a> IntoIterator for &'a CountMap {
    type Item = (&'a String, &'a u64);
    type IntoIter = hash_map::Iter<'a, String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

impl FromIterator<(String, u64)> for CountMap {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        let mut map = CountMap::new();
        for (token, count) in iter {
            map.insert(token, count);
        }
        map
    }
}

/// Inclusive range of acceptable counts.
///
/// `lower > upper` is not rejected; such a range simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountRange {
    pub lower: i64,
    pub upper: i64,
}

impl CountRange {
    pub fn new(lower: i64, upper: i64) -> Self {
        Self { lower, upper }
    }

    /// Whether `count` lies within `[lower, upper]`
    pub fn contains(&self, count: u64) -> bool {
        // counts beyond i64::MAX are above any upper bound
        match i64::try_from(count) {
            Ok(count) => self.lower <= count && count <= self.upper,
            Err(_) => false,
        }
    }
}

impl Default for CountRange {
    fn default() -> Self {
        Self {
            lower: DEFAULT_LOWER,
            upper: DEFAULT_UPPER,
        }
    }
}

/// A single ranked entry; serializes as `["word", count]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount(pub String, pub u64);

impl WordCount {
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self(word.into(), count)
    }

    pub fn word(&self) -> &str {
        &self.0
    }

    pub fn count(&self) -> u64 {
        self.1
    }
}

/// Entries ordered by count descending, then word ascending
pub type RankedList = Vec<WordCount>;
