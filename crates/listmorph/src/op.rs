//! Atomic edit operations emitted by the diff.
//!
//! A reconciliation run produces an ordered list of [`MorphOp`] values:
//! all deletions first, then insertions, then moves, then updates, each
//! group in ascending index order. Applying them in that order (see
//! [`apply`](crate::apply::apply)) morphs "before" into "after".
//!
//! Index spaces differ per kind:
//! - `Deletion.from` indexes the original "before" sequence.
//! - `Insertion.at` and `Update.at` index the "after" sequence.
//! - `Move.from` is the element's tracked position in the in-progress
//!   target ordering at emission time; `Move.to` is its final index in
//!   "after".

use std::fmt;

/// One atomic edit operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MorphOp {
    /// Remove the element at `from` (an index into "before").
    Deletion { from: usize },
    /// A new element appears at `at` (an index into "after").
    Insertion { at: usize },
    /// A surviving element moves from its tracked position `from` to its
    /// final index `to` in "after".
    Move { from: usize, to: usize },
    /// The surviving element at `at` (an index into "after") changed
    /// content and must be refreshed.
    Update { at: usize },
}

impl MorphOp {
    /// Human-readable name of the operation kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Deletion { .. } => "Deletion",
            Self::Insertion { .. } => "Insertion",
            Self::Move { .. } => "Move",
            Self::Update { .. } => "Update",
        }
    }

    /// The primary index of the operation: `from` for deletions and moves,
    /// `at` for insertions and updates.
    pub const fn index(self) -> usize {
        match self {
            Self::Deletion { from } | Self::Move { from, .. } => from,
            Self::Insertion { at } | Self::Update { at } => at,
        }
    }

    /// True for `Move` operations.
    #[inline]
    pub const fn is_move(self) -> bool {
        matches!(self, Self::Move { .. })
    }
}

impl fmt::Display for MorphOp {
    /// Renders the driver line format: `Kind: index`, with ` -> to`
    /// appended for moves.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name(), self.index())?;
        if let Self::Move { to, .. } = self {
            write!(f, " -> {to}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_kinds() {
        assert_eq!(MorphOp::Deletion { from: 0 }.name(), "Deletion");
        assert_eq!(MorphOp::Insertion { at: 0 }.name(), "Insertion");
        assert_eq!(MorphOp::Move { from: 0, to: 1 }.name(), "Move");
        assert_eq!(MorphOp::Update { at: 0 }.name(), "Update");
    }

    #[test]
    fn display_renders_driver_lines() {
        assert_eq!(MorphOp::Deletion { from: 3 }.to_string(), "Deletion: 3");
        assert_eq!(MorphOp::Insertion { at: 1 }.to_string(), "Insertion: 1");
        assert_eq!(MorphOp::Move { from: 4, to: 2 }.to_string(), "Move: 4 -> 2");
        assert_eq!(MorphOp::Update { at: 0 }.to_string(), "Update: 0");
    }

    #[test]
    fn index_picks_primary_field() {
        assert_eq!(MorphOp::Deletion { from: 5 }.index(), 5);
        assert_eq!(MorphOp::Move { from: 7, to: 2 }.index(), 7);
        assert_eq!(MorphOp::Update { at: 9 }.index(), 9);
    }

    #[test]
    fn is_move_only_for_moves() {
        assert!(MorphOp::Move { from: 0, to: 1 }.is_move());
        assert!(!MorphOp::Update { at: 0 }.is_move());
    }
}
