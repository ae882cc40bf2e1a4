use std::collections::HashSet;
use std::hash::Hash;

/// Drops repeated items, keeping each one at the position of its first occurrence.
pub fn dedup_vector<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen: HashSet<&T> = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}
