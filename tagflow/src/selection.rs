//! Selected tag indices.
//!
//! Selection is keyed by position. Indices name tags in the current list
//! only; replacing the list invalidates them, which is why the controller
//! clears the set whenever tags are replaced.

use indexmap::IndexSet;

/// Insertion-ordered set of selected tag indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    indices: IndexSet<usize>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every index in `0..count`, ascending.
    pub fn all(count: usize) -> Self {
        Self {
            indices: (0..count).collect(),
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Indices in the order they were selected.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }

    /// Returns true if the index was not already selected.
    pub fn insert(&mut self, index: usize) -> bool {
        self.indices.insert(index)
    }

    /// Returns true if the index was selected. Later selections keep their
    /// relative order.
    pub fn remove(&mut self, index: usize) -> bool {
        self.indices.shift_remove(&index)
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = usize;
    type IntoIter = std::iter::Copied<indexmap::set::Iter<'a, usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.indices.iter().copied()
    }
}
