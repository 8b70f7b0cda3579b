use std::cmp::Ordering;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedEntry<'a> {
    pub message: &'a [u8],
    pub count: u64,
}

impl RankedEntry<'_> {
    /// Count descending, then message ascending by byte order (code point
    /// order for UTF-8). Distinct messages never compare equal.
    fn rank_order(&self, other: &Self) -> Ordering {
        other
            .count
            .cmp(&self.count)
            .then_with(|| self.message.cmp(other.message))
    }
}

/// Returns at most `top_n` entries, most frequent first.
pub fn rank(message_counts: &HashMap<Vec<u8>, u64>, top_n: usize) -> Vec<RankedEntry<'_>> {
    let mut entries: Vec<RankedEntry<'_>> = message_counts
        .iter()
        .map(|(message, count)| RankedEntry {
            message: message.as_slice(),
            count: *count,
        })
        .collect();

    entries.sort_unstable_by(|a, b| a.rank_order(b));
    entries.truncate(top_n);
    entries
}
