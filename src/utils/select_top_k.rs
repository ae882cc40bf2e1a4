use crate::models::FrequencyTable;
use crate::types::ItemFrequency;
use std::hash::Hash;

/// Selects the `n` most frequent items of a frequency table.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by frequency in descending order (higher frequency first).
/// - **Secondary:** Items with the same frequency keep the order in which they
///   were first recorded. The sort is stable, so the selection is deterministic.
///
/// ### Returns:
/// - A `Vec` of `(item, frequency)` pairs of length `min(n, table.len())`.
///   `n == 0` yields an empty vector.
///
/// ### Example:
/// ```rust
/// use tweet_sniffer::{select_top_k, FrequencyTable};
///
/// let table: FrequencyTable<&str> = ["hope", "vote", "vote", "maga"].into_iter().collect();
///
/// assert_eq!(select_top_k(&table, 2), vec![("vote", 2), ("hope", 1)]);
/// ```
pub fn select_top_k<T: Eq + Hash + Clone>(
    table: &FrequencyTable<T>,
    n: usize,
) -> Vec<(T, ItemFrequency)> {
    if n == 0 {
        return Vec::new();
    }

    let mut sorted_results: Vec<(T, ItemFrequency)> = table
        .iter()
        .map(|(item, frequency)| (item.clone(), frequency))
        .collect();

    // `sort_by` is stable: equal frequencies stay in first-seen order
    sorted_results.sort_by(|a, b| b.1.cmp(&a.1));
    sorted_results.truncate(n);

    sorted_results
}
