//! Position remap table threaded through the diff passes.
//!
//! The table holds one [`Slot`] per "before" position. A live slot tracks
//! where that element currently sits in the target sequence being built;
//! a vacated slot means the element is fully accounted for (deleted, or
//! already placed by a move). An explicit enum replaces the out-of-range
//! sentinel a naive implementation would use, so "removed" is a
//! type-checked state rather than a magic value.
//!
//! The ripple methods are the heart of the algorithm. Invariant they
//! maintain: every live slot equals the element's current position in the
//! in-progress target ordering, accounting for all insertions and moves
//! seen so far.

use smallvec::SmallVec;

/// Slots kept inline before spilling to the heap; diffs over small
/// collections never allocate for the table.
const INLINE_SLOTS: usize = 32;

/// State of one "before" position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// The element's current believed position in the target ordering.
    Tracked(usize),
    /// Deleted, or already placed by a move; no further bookkeeping.
    Removed,
}

impl Slot {
    /// The tracked position, if the slot is live.
    #[inline]
    pub const fn position(self) -> Option<usize> {
        match self {
            Self::Tracked(pos) => Some(pos),
            Self::Removed => None,
        }
    }

    /// True when the slot still tracks a position.
    #[inline]
    pub const fn is_tracked(self) -> bool {
        matches!(self, Self::Tracked(_))
    }
}

/// Per-"before"-position table of tracked target positions.
#[derive(Debug, Clone)]
pub struct RemapTable {
    slots: SmallVec<[Slot; INLINE_SLOTS]>,
}

impl RemapTable {
    /// Create an empty table with room for `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: SmallVec::with_capacity(capacity),
        }
    }

    /// Append a live slot tracking `position`.
    #[inline]
    pub fn push_tracked(&mut self, position: usize) {
        self.slots.push(Slot::Tracked(position));
    }

    /// Append a vacated slot.
    #[inline]
    pub fn push_removed(&mut self) {
        self.slots.push(Slot::Removed);
    }

    /// Number of slots (equals the "before" length once populated).
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when the table has no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The slot at `index`.
    #[inline]
    pub fn slot(&self, index: usize) -> Slot {
        self.slots[index]
    }

    /// Vacate the slot at `index` (the element has been placed).
    #[inline]
    pub fn vacate(&mut self, index: usize) {
        self.slots[index] = Slot::Removed;
    }

    /// Absorb an insertion at target position `at`.
    ///
    /// Walks forward from `cursor`, renumbering live slots so each one
    /// again equals its element's current target position with the new
    /// insertion accounted for. The walk stops at the first live slot
    /// already tracking `at`; a slot tracking exactly `at` is then bumped
    /// by one — prepend semantics, the "equal counts as needing a bump"
    /// edge case. `cursor` advances monotonically across calls and must
    /// start at the first surviving "before" position.
    pub fn ripple_insertion(&mut self, at: usize, cursor: &mut usize) {
        let mut k = *cursor;
        while k < self.slots.len() {
            if let Slot::Tracked(pos) = self.slots[k] {
                if pos == at {
                    *cursor = k;
                    break;
                }
                if *cursor < k {
                    if let Slot::Tracked(base) = self.slots[*cursor] {
                        self.slots[k] = Slot::Tracked(base + 1);
                    }
                    *cursor = k;
                }
            }
            k += 1;
        }
        if let Some(Slot::Tracked(pos)) = self.slots.get_mut(*cursor) {
            if *pos == at {
                *pos += 1;
            }
        }
    }

    /// Finish the insertion pass: renumber live slots the insertion walks
    /// never reached, so insertions at the very end are reflected too.
    pub fn ripple_tail(&mut self, mut cursor: usize) {
        if cursor >= self.slots.len() {
            return;
        }
        let mut k = cursor;
        loop {
            if self.slots[k].is_tracked() && cursor < k {
                if let Slot::Tracked(base) = self.slots[cursor] {
                    self.slots[k] = Slot::Tracked(base + 1);
                }
                cursor = k;
            }
            k += 1;
            if k >= self.slots.len() {
                break;
            }
        }
    }

    /// Absorb the gap a move leaves behind: every live slot in
    /// `start..end` shifts right by one.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or `end > len()`.
    pub fn bump_range(&mut self, start: usize, end: usize) {
        for slot in &mut self.slots[start..end] {
            if let Slot::Tracked(pos) = slot {
                *pos += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(slots: &[Slot]) -> RemapTable {
        let mut t = RemapTable::with_capacity(slots.len());
        for s in slots {
            match s {
                Slot::Tracked(p) => t.push_tracked(*p),
                Slot::Removed => t.push_removed(),
            }
        }
        t
    }

    fn positions(t: &RemapTable) -> Vec<Option<usize>> {
        (0..t.len()).map(|i| t.slot(i).position()).collect()
    }

    #[test]
    fn insertion_at_tracked_position_bumps_it() {
        // Survivor tracked at 0; inserting at 0 must push it to 1
        // (prepend semantics).
        let mut t = table(&[Slot::Tracked(0)]);
        let mut cursor = 0;
        t.ripple_insertion(0, &mut cursor);
        assert_eq!(positions(&t), vec![Some(1)]);
        assert_eq!(cursor, 0);
    }

    #[test]
    fn insertion_past_all_survivors_changes_nothing() {
        let mut t = table(&[Slot::Tracked(0)]);
        let mut cursor = 0;
        t.ripple_insertion(1, &mut cursor);
        assert_eq!(positions(&t), vec![Some(0)]);
    }

    #[test]
    fn insertion_walk_renumbers_up_to_the_insertion_point() {
        // Two survivors tracked at 0 and 1; inserting at 1 renumbers the
        // second to 2 via the walk plus the equal bump.
        let mut t = table(&[Slot::Tracked(0), Slot::Tracked(1)]);
        let mut cursor = 0;
        t.ripple_insertion(1, &mut cursor);
        assert_eq!(positions(&t), vec![Some(0), Some(2)]);
        assert_eq!(cursor, 1);
    }

    #[test]
    fn consecutive_prepends_stack() {
        let mut t = table(&[Slot::Tracked(0)]);
        let mut cursor = 0;
        t.ripple_insertion(0, &mut cursor);
        t.ripple_insertion(1, &mut cursor);
        // Tracked 0 -> 1 after first prepend, 1 -> 2 after the second.
        assert_eq!(positions(&t), vec![Some(2)]);
    }

    #[test]
    fn ripple_tail_renumbers_remaining_live_slots() {
        // Cursor stopped at slot 0; live tails renumber consecutively
        // from its value, skipping removed slots.
        let mut t = table(&[Slot::Tracked(1), Slot::Removed, Slot::Tracked(1)]);
        t.ripple_tail(0);
        assert_eq!(positions(&t), vec![Some(1), None, Some(2)]);
    }

    #[test]
    fn ripple_tail_out_of_range_cursor_is_noop() {
        let mut t = table(&[Slot::Tracked(0)]);
        t.ripple_tail(1);
        assert_eq!(positions(&t), vec![Some(0)]);
    }

    #[test]
    fn bump_range_skips_removed_slots() {
        let mut t = table(&[Slot::Tracked(3), Slot::Removed, Slot::Tracked(5)]);
        t.bump_range(0, 3);
        assert_eq!(positions(&t), vec![Some(4), None, Some(6)]);
    }

    #[test]
    fn bump_range_is_half_open() {
        let mut t = table(&[Slot::Tracked(0), Slot::Tracked(1)]);
        t.bump_range(0, 1);
        assert_eq!(positions(&t), vec![Some(1), Some(1)]);
    }

    #[test]
    fn vacate_clears_tracking() {
        let mut t = table(&[Slot::Tracked(2)]);
        t.vacate(0);
        assert_eq!(t.slot(0), Slot::Removed);
        assert!(!t.slot(0).is_tracked());
    }
}
