//! The reconciliation diff: four passes over a shared remap table.
//!
//! [`compute_diff`] classifies every element of "before" as deleted or
//! surviving, every element of "after" as inserted or matched, and emits
//! the operations needed to morph one into the other:
//!
//! 1. **Deletion pass** — scan "before"; elements absent from "after"
//!    emit a [`Deletion`](MorphOp::Deletion) and vacate their slot;
//!    survivors record their position after compacting out deletions.
//! 2. **Insertion pass** — scan "after" in order; new elements emit an
//!    [`Insertion`](MorphOp::Insertion) and ripple the remap table so
//!    tracked positions absorb the shift. Skipped entirely when "after"
//!    is no longer than the surviving count.
//! 3. **Move pass** — matched elements whose tracked position differs
//!    from their final index emit a [`Move`](MorphOp::Move), vacate
//!    their slot, and bump the live slots left of them to absorb the gap.
//! 4. **Update pass** — matched elements carrying the dirty flag emit an
//!    [`Update`](MorphOp::Update).
//!
//! The computation is pure and deterministic: identical inputs always
//! yield the identical operation list. Runtime is linear in both input
//! lengths for the lookups plus the ripple work, worst case proportional
//! to the product of the two lengths.
//!
//! # Usage
//!
//! ```
//! use listmorph::{Element, Key, MorphOp, compute_diff};
//!
//! let before = [Element::clean(Key::new(1)), Element::clean(Key::new(2))];
//! let after = [Element::clean(Key::new(2))];
//! let ops = compute_diff(&before, &after);
//! assert_eq!(ops, vec![MorphOp::Deletion { from: 0 }]);
//! ```
//!
//! # Duplicate keys
//!
//! Keys are expected to be unique within each input. With duplicates the
//! result is unspecified but deterministic and never panics: lookups
//! resolve to the first occurrence in sequence order, and an
//! already-placed slot is skipped rather than re-moved. Use
//! [`compute_diff_checked`](crate::compute_diff_checked) to reject
//! duplicates at the boundary instead.

use crate::element::Element;
use crate::key_index::KeyIndex;
use crate::op::MorphOp;
use crate::remap::{RemapTable, Slot};
use smallvec::SmallVec;

/// Matched flags kept inline before spilling to the heap.
const INLINE_MATCHED: usize = 32;

/// Compute the ordered operation list that morphs `before` into `after`.
///
/// Operations are emitted as all deletions (ascending "before" index),
/// then insertions (ascending "after" index), then moves (ascending
/// target index), then updates (ascending "after" index). That emitted
/// order is the application order; see [`apply`](crate::apply::apply).
pub fn compute_diff(before: &[Element], after: &[Element]) -> Vec<MorphOp> {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!(
        "compute_diff",
        before_len = before.len(),
        after_len = after.len()
    );
    #[cfg(feature = "tracing")]
    let _guard = _span.enter();

    let mut ops = Vec::with_capacity(before.len() + after.len());

    let after_index = KeyIndex::build(after);
    let before_index = KeyIndex::build(before);

    let mut remap = RemapTable::with_capacity(before.len());
    let mut matched: SmallVec<[bool; INLINE_MATCHED]> =
        SmallVec::from_elem(false, after.len());

    // Deletion pass: classify every "before" element, compacting survivor
    // positions past the deletions seen so far.
    let mut deleted = 0usize;
    let mut first_survivor: Option<usize> = None;
    for (i, element) in before.iter().enumerate() {
        match after_index.get(element.key) {
            None => {
                deleted += 1;
                ops.push(MorphOp::Deletion { from: i });
                remap.push_removed();
            }
            Some(position_in_after) => {
                if first_survivor.is_none() {
                    first_survivor = Some(i);
                }
                remap.push_tracked(i - deleted);
                matched[position_in_after] = true;
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(deleted, survivors = before.len() - deleted, "deletion pass done");

    // Insertion pass: only needed when "after" outgrew the survivors.
    let survivors = before.len() - deleted;
    if after.len() > survivors {
        let mut cursor = first_survivor.unwrap_or(before.len());
        for (i, element) in after.iter().enumerate() {
            if !before_index.contains(element.key) {
                remap.ripple_insertion(i, &mut cursor);
                ops.push(MorphOp::Insertion { at: i });
            }
        }
        remap.ripple_tail(cursor);
    }

    // Move pass: matched elements out of tracked position get pulled to
    // their final index; the vacated gap shifts the live slots before
    // them one to the right.
    let ripple_start = first_survivor.unwrap_or(before.len());
    for (i, element) in after.iter().enumerate() {
        if !matched[i] {
            continue;
        }
        let Some(j) = before_index.get(element.key) else {
            continue;
        };
        if let Slot::Tracked(tracked) = remap.slot(j) {
            if tracked != i {
                ops.push(MorphOp::Move { from: tracked, to: i });
                remap.vacate(j);
                remap.bump_range(ripple_start, j);
            }
        }
    }

    // Update pass: reads only the matched flags and dirty bits.
    for (i, element) in after.iter().enumerate() {
        if matched[i] && element.dirty {
            ops.push(MorphOp::Update { at: i });
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(op_count = ops.len(), "diff complete");

    ops
}
