//! Occurrence counts of every position reached in a game.
//!
//! A multiset keyed by the normalized Zobrist position key. Entries are added
//! after every applied move and never removed.

use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionHistory {
    counts: HashMap<u64, u32>,
    recorded: usize,
}

impl PositionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of `key` and return its new count.
    pub fn record(&mut self, key: u64) -> u32 {
        self.recorded += 1;
        let count = self.counts.entry(key).or_insert(0);
        *count += 1;
        *count
    }

    pub fn occurrences(&self, key: u64) -> u32 {
        self.counts.get(&key).copied().unwrap_or(0)
    }

    /// Total positions recorded, repeats included.
    pub fn len(&self) -> usize {
        self.recorded
    }

    pub fn is_empty(&self) -> bool {
        self.recorded == 0
    }
}
