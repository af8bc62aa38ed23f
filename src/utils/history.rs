//! A bounded FIFO list for snapshot history.
//!
//! Keeps at most `N` entries; pushing past capacity evicts the oldest entry
//! first. Serializes as a plain JSON array, and pruning is re-applied on
//! deserialization so oversized persisted lists shrink on load.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// Bounded FIFO history with at most `N` entries, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct History<T, const N: usize> {
    entries: Vec<T>,
}

impl<T, const N: usize> History<T, N> {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry, evicting the oldest entry once past capacity.
    pub fn push(&mut self, entry: T) {
        self.entries.push(entry);
        self.prune();
    }

    /// Drops entries from the front until at most `N` remain.
    fn prune(&mut self) {
        let excess = self.entries.len().saturating_sub(N);
        if excess > 0 {
            self.entries.drain(..excess);
        }
    }

    /// Newest entry, if any.
    pub fn latest(&self) -> Option<&T> {
        self.entries.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates oldest to newest.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }
}

impl<T, const N: usize> Default for History<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a History<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<T: Serialize, const N: usize> Serialize for History<T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>, const N: usize> Deserialize<'de> for History<T, N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut history = Self {
            entries: Vec::<T>::deserialize(deserializer)?,
        };
        history.prune();
        Ok(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_within_capacity() {
        let mut history: History<i32, 3> = History::new();
        history.push(1);
        history.push(2);

        assert_eq!(history.len(), 2);
        assert_eq!(history.latest(), Some(&2));
    }

    #[test]
    fn test_fifo_eviction() {
        let mut history: History<i32, 3> = History::new();
        for i in 1..=5 {
            history.push(i);
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5]);
    }

    #[test]
    fn test_never_exceeds_capacity() {
        let mut history: History<i32, 12> = History::new();
        for i in 0..100 {
            history.push(i);
        }

        assert_eq!(history.len(), 12);
        assert_eq!(history.latest(), Some(&99));
    }

    #[test]
    fn test_clear() {
        let mut history: History<i32, 3> = History::new();
        history.push(1);
        history.clear();

        assert!(history.is_empty());
        assert_eq!(history.latest(), None);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let mut history: History<i32, 3> = History::new();
        history.push(1);
        history.push(2);

        assert_eq!(serde_json::to_string(&history).unwrap(), "[1,2]");
    }

    #[test]
    fn test_deserialize_prunes_oversized_list() {
        let history: History<i32, 3> = serde_json::from_str("[1,2,3,4,5]").unwrap();
        assert_eq!(history.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5]);
    }

    #[test]
    fn test_round_trip() {
        let mut history: History<i32, 4> = History::new();
        history.push(10);
        history.push(20);

        let json = serde_json::to_string(&history).unwrap();
        let back: History<i32, 4> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, history);
    }
}
