//! Ranker
//!
//! Orders entries by count descending, breaking ties alphabetically. This is
//! the same order as sorting by word and then stable-sorting by count, done as
//! one sort with a composite key.

use std::cmp::Ordering;

use crate::core::model::{CountMap, RankedList, WordCount};

/// Composite ordering: higher count first, then word ascending
pub fn compare(a: &WordCount, b: &WordCount) -> Ordering {
    b.count()
        .cmp(&a.count())
        .then_with(|| a.word().cmp(b.word()))
}

/// Produce the ranked list for `counts`
pub fn rank(counts: &CountMap) -> RankedList {
    let mut ranked: RankedList = counts
        .iter()
        .map(|(word, count)| WordCount::new(word.clone(), *count))
        .collect();
    ranked.sort_by(compare);
    ranked
}
