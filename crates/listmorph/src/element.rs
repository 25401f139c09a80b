//! Keyed elements of an ordered collection.
//!
//! An [`Element`] is the unit the reconciliation engine reasons about: a
//! stable 64-bit [`Key`] naming its logical identity, plus a dirty flag
//! marking that its content changed and an update is required. Position is
//! not stored on the element; it is the element's index in its sequence.
//!
//! # Usage
//!
//! ```
//! use listmorph::element::{Element, Key};
//!
//! let a = Element::clean(Key::new(7));
//! let b = Element::dirty(Key::new(7));
//! assert_eq!(a.key, b.key); // same logical item
//! assert!(!a.dirty);
//! assert!(b.dirty);
//! ```

use std::fmt;

/// Stable identity of an element across the "before" and "after" sequences.
///
/// Two elements with the same key are the same logical item regardless of
/// position or dirty state. Keys are expected to be unique within one
/// sequence; see [`compute_diff_checked`](crate::compute_diff_checked) for
/// a boundary that enforces this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(pub i64);

impl Key {
    /// Create a key from a raw value.
    #[inline]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the raw key value.
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Key {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

/// One element of an ordered collection: identity plus a dirty flag.
///
/// The dirty flag is only meaningful on elements of the "after" sequence,
/// where it requests an Update operation for a surviving element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Element {
    /// Stable identity, unique within the element's own sequence.
    pub key: Key,
    /// Content changed; a surviving element with this flag set in "after"
    /// yields an Update operation.
    pub dirty: bool,
}

impl Element {
    /// Create an element with the dirty flag clear.
    #[inline]
    pub const fn clean(key: Key) -> Self {
        Self { key, dirty: false }
    }

    /// Create an element with the dirty flag set.
    #[inline]
    pub const fn dirty(key: Key) -> Self {
        Self { key, dirty: true }
    }
}
