//! Accumulator

use crate::core::model::CountMap;

/// Add every token to `counts` and hand the map back
pub fn accumulate<I>(tokens: I, mut counts: CountMap) -> CountMap
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    for token in tokens {
        counts.increment(token);
    }
    counts
}
