//! Novelty: first occurrence of each distinct item in a sequence.

pub mod types;

pub use types::{NoveltyColumn, NoveltyRow, NoveltyTable, COLUMNS};

use std::hash::Hash;

use decibans_core::types::collections::FxHashMap;

/// Summarize the first occurrence of every distinct item in `items`.
///
/// `items` is taken to be in order of occurrence. Rows come out sorted by
/// `first_index`; an empty input yields an empty table.
///
/// Single pass: a map from item to row index buckets repeat occurrences.
///
/// # Examples
/// ```
/// use decibans_analysis::novelty;
/// let table = novelty(&["a", "b", "a", "c", "b"]);
/// let c = table.get(&"c").unwrap();
/// assert_eq!((c.first_index, c.frequency, c.running_total), (3, 1, 3));
/// ```
pub fn novelty<T>(items: &[T]) -> NoveltyTable<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen: FxHashMap<&T, usize> = FxHashMap::default();
    let mut rows: Vec<NoveltyRow<T>> = Vec::new();

    for (index, item) in items.iter().enumerate() {
        if let Some(&row_idx) = seen.get(item) {
            rows[row_idx].frequency += 1;
        } else {
            let row_idx = rows.len();
            seen.insert(item, row_idx);
            rows.push(NoveltyRow {
                item: item.clone(),
                first_index: index,
                frequency: 1,
                running_total: row_idx + 1,
            });
        }
    }

    tracing::debug!(items = items.len(), distinct = rows.len(), "novelty summary");
    NoveltyTable::from_rows(rows)
}
