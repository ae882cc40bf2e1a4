use crate::types::ItemFrequency;
use crate::utils::select_top_k;
use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counts per item, remembering the order in which items were first seen.
///
/// The first-seen order is what makes top-k tie breaking deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<T: Eq + Hash> {
    entries: Vec<(T, ItemFrequency)>,
    index: HashMap<T, usize>,
}

impl<T: Eq + Hash + Clone> FrequencyTable<T> {
    pub fn new() -> Self {
        FrequencyTable {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Counts one occurrence of `item`.
    pub fn record(&mut self, item: T) {
        self.record_n(item, 1);
    }

    /// Counts `count` occurrences of `item`.
    ///
    /// An item recorded with a zero count still takes its first-seen position.
    pub fn record_n(&mut self, item: T, count: ItemFrequency) {
        if let Some(&position) = self.index.get(&item) {
            self.entries[position].1 += count;
        } else {
            self.index.insert(item.clone(), self.entries.len());
            self.entries.push((item, count));
        }
    }

    pub fn get(&self, item: &T) -> ItemFrequency {
        self.index
            .get(item)
            .map(|&position| self.entries[position].1)
            .unwrap_or(0)
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> ItemFrequency {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, ItemFrequency)> {
        self.entries.iter().map(|(item, count)| (item, *count))
    }

    /// The `n` most frequent items, count descending, ties in first-seen order.
    pub fn top(&self, n: usize) -> Vec<(T, ItemFrequency)> {
        select_top_k(self, n)
    }

    /// Each item's share of the total count, in first-seen order.
    ///
    /// Empty when the table holds no occurrences.
    pub fn proportions(&self) -> Vec<(T, f64)> {
        let total = self.total();
        if total == 0 {
            return Vec::new();
        }

        self.entries
            .iter()
            .map(|(item, count)| (item.clone(), *count as f64 / total as f64))
            .collect()
    }

    /// Adds every count of `other` into this table, appending unseen items in
    /// `other`'s first-seen order.
    pub fn merge(&mut self, other: &FrequencyTable<T>) {
        for (item, count) in other.iter() {
            self.record_n(item.clone(), count);
        }
    }
}

impl<T: Eq + Hash + Clone> Default for FrequencyTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> FromIterator<T> for FrequencyTable<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        table.extend(iter);
        table
    }
}

impl<T: Eq + Hash + Clone> Extend<T> for FrequencyTable<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.record(item);
        }
    }
}
