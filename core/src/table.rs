//! The sorted `(key, offset)` table which the index searches.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::Debug;

/// A key together with its position in the source dataset
#[derive(Clone, Copy, PartialEq)]
pub struct Entry<K> {
    /// Key
    pub key: K,

    /// Position of the key in the dataset the table was built from
    pub offset: usize,
}

impl<K> Entry<K> {
    /// Create a new entry
    pub fn new(key: K, offset: usize) -> Self {
        Self { key, offset }
    }
}

impl<K> Borrow<K> for Entry<K> {
    fn borrow(&self) -> &K {
        &self.key
    }
}

impl<K: Debug> Debug for Entry<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("({:?}, {:?})", &self.key, &self.offset))
    }
}

/// Every key of a dataset with its original offset, sorted by key. Equal keys keep
/// the order in which they appeared in the dataset.
#[derive(Clone, PartialEq)]
pub struct SortedTable<K> {
    entries: Vec<Entry<K>>,
}

impl<K: PartialOrd + Copy> SortedTable<K> {
    /// Build the table in `O(n log n)`. Keys must be totally ordered: incomparable
    /// keys such as NaN are treated as equal to everything and leave the table
    /// unsorted, so they must be rejected beforehand.
    pub fn new(dataset: &[K]) -> Self {
        let mut entries: Vec<Entry<K>> = dataset
            .iter()
            .enumerate()
            .map(|(offset, key)| Entry::new(*key, offset))
            .collect();

        // `sort_by` is stable, ties stay in offset order
        entries.sort_by(|a, b| a.key.partial_cmp(&b.key).unwrap_or(Ordering::Equal));

        Self { entries }
    }
}

impl<K> SortedTable<K> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Entry<K>> {
        self.entries.get(position)
    }

    pub fn entries(&self) -> &[Entry<K>] {
        self.entries.as_slice()
    }

    /// Keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.iter().map(|entry| &entry.key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry<K>> {
        self.entries.iter()
    }
}

impl<K: Debug> Debug for SortedTable<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.entries.iter()).finish()
    }
}

impl<'a, K> IntoIterator for &'a SortedTable<K> {
    type Item = &'a Entry<K>;
    type IntoIter = std::slice::Iter<'a, Entry<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
