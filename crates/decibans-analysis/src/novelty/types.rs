//! Tabular output of the novelty summary.

use serde::{Deserialize, Serialize};

/// Column names, in table order.
pub const COLUMNS: [&str; 4] = ["item", "first_index", "frequency", "running_total"];

/// One distinct item and its first-occurrence statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoveltyRow<T> {
    /// The distinct value.
    pub item: T,
    /// Index of its first occurrence in the input.
    pub first_index: usize,
    /// Total occurrences in the input.
    pub frequency: usize,
    /// Distinct items seen in `items[0..=first_index]`.
    pub running_total: usize,
}

/// A borrowed column of a [`NoveltyTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoveltyColumn<'a, T> {
    Item(Vec<&'a T>),
    FirstIndex(Vec<usize>),
    Frequency(Vec<usize>),
    RunningTotal(Vec<usize>),
}

impl<'a, T> NoveltyColumn<'a, T> {
    pub fn len(&self) -> usize {
        match self {
            Self::Item(v) => v.len(),
            Self::FirstIndex(v) | Self::Frequency(v) | Self::RunningTotal(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The numeric values, or `None` for the item column.
    pub fn as_counts(&self) -> Option<&[usize]> {
        match self {
            Self::Item(_) => None,
            Self::FirstIndex(v) | Self::Frequency(v) | Self::RunningTotal(v) => Some(v),
        }
    }
}

/// First-occurrence summary, one row per distinct item.
///
/// Rows are ordered by `first_index` ascending, so `running_total` equals
/// the row's position plus one. Serializes as an array of row records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoveltyTable<T> {
    rows: Vec<NoveltyRow<T>>,
}

impl<T> NoveltyTable<T> {
    pub(crate) fn from_rows(rows: Vec<NoveltyRow<T>>) -> Self {
        Self { rows }
    }

    /// Number of rows (distinct items).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[NoveltyRow<T>] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NoveltyRow<T>> {
        self.rows.iter()
    }

    /// Row for `item`, if it occurred.
    pub fn get(&self, item: &T) -> Option<&NoveltyRow<T>>
    where
        T: PartialEq,
    {
        self.rows.iter().find(|row| &row.item == item)
    }

    /// Column lookup by name; see [`COLUMNS`]. Unknown names return `None`.
    pub fn column(&self, name: &str) -> Option<NoveltyColumn<'_, T>> {
        let column = match name {
            "item" => NoveltyColumn::Item(self.rows.iter().map(|r| &r.item).collect()),
            "first_index" => {
                NoveltyColumn::FirstIndex(self.rows.iter().map(|r| r.first_index).collect())
            }
            "frequency" => {
                NoveltyColumn::Frequency(self.rows.iter().map(|r| r.frequency).collect())
            }
            "running_total" => {
                NoveltyColumn::RunningTotal(self.rows.iter().map(|r| r.running_total).collect())
            }
            _ => return None,
        };
        Some(column)
    }

    pub fn into_rows(self) -> Vec<NoveltyRow<T>> {
        self.rows
    }
}

impl<T> Default for NoveltyTable<T> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<T> IntoIterator for NoveltyTable<T> {
    type Item = NoveltyRow<T>;
    type IntoIter = std::vec::IntoIter<NoveltyRow<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a NoveltyTable<T> {
    type Item = &'a NoveltyRow<T>;
    type IntoIter = std::slice::Iter<'a, NoveltyRow<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
