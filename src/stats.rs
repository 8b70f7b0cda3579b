use std::collections::{BTreeMap, HashMap};

use crate::level::{classify, Level};
use crate::message::extract_message;

/// Running totals for one log file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Stats {
    pub total_lines: u64,
    /// Only levels seen at least once have an entry.
    pub level_counts: BTreeMap<Level, u64>,
    /// Keyed by the exact trimmed message bytes; empty messages are never
    /// stored.
    pub message_counts: HashMap<Vec<u8>, u64>,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ingest<L: AsRef<[u8]> + ?Sized>(&mut self, line: &L) {
        let line = line.as_ref();
        self.total_lines += 1;

        *self.level_counts.entry(classify(line)).or_insert(0) += 1;

        let message = extract_message(line);
        if !message.is_empty() {
            // Avoid allocating for messages we've already seen.
            match self.message_counts.get_mut(message) {
                Some(count) => *count += 1,
                None => {
                    self.message_counts.insert(message.to_vec(), 1);
                }
            }
        }
    }

    pub fn level_count(&self, level: Level) -> u64 {
        self.level_counts.get(&level).copied().unwrap_or(0)
    }

    pub fn distinct_messages(&self) -> usize {
        self.message_counts.len()
    }
}
