//! Key-to-position lookup for one sequence.
//!
//! Each diff builds one [`KeyIndex`] per input sequence: a hash map from
//! key to the index of its first occurrence. This replaces the repeated
//! linear scans of a naive implementation (quadratic worst case) with
//! O(1) lookups while keeping the same tie-break: with duplicate keys,
//! the first occurrence in sequence order wins.

use crate::element::{Element, Key};
use ahash::AHashMap;

/// Hash index from element key to its first position in a sequence.
#[derive(Debug, Clone)]
pub struct KeyIndex {
    positions: AHashMap<Key, usize>,
}

impl KeyIndex {
    /// Build the index for `sequence` in one pass.
    ///
    /// Duplicate keys keep the first occurrence, matching a front-to-back
    /// linear scan.
    pub fn build(sequence: &[Element]) -> Self {
        let mut positions = AHashMap::with_capacity(sequence.len());
        for (i, element) in sequence.iter().enumerate() {
            positions.entry(element.key).or_insert(i);
        }
        Self { positions }
    }

    /// Position of `key` in the indexed sequence, if present.
    #[inline]
    pub fn get(&self, key: Key) -> Option<usize> {
        self.positions.get(&key).copied()
    }

    /// True when `key` occurs in the indexed sequence.
    #[inline]
    pub fn contains(&self, key: Key) -> bool {
        self.positions.contains_key(&key)
    }

    /// Number of distinct keys in the indexed sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when the indexed sequence had no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
