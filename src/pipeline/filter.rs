//! Range filter

use crate::core::model::{CountMap, CountRange};

/// Keep only the entries whose count lies within `range` (both ends inclusive)
pub fn filter(counts: CountMap, range: CountRange) -> CountMap {
    counts
        .into_iter()
        .filter(|(_, count)| range.contains(*count))
        .collect()
}
