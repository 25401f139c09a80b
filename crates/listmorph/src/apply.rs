//! Sequential application of an emitted operation list.
//!
//! [`apply`] splices the operations of [`compute_diff`](crate::compute_diff)
//! into a working copy of "before", in emitted order: deletions, then
//! insertions, then moves, then updates. Inserted and updated content is
//! sourced from "after" through the operation's index.
//!
//! # Fidelity
//!
//! The result reproduces "after" exactly for insertion-free diffs
//! (delete/move/update), for diffs with a single insertion that keep
//! survivor order, and for append-only growth. With several insertions
//! interleaved among survivors the single ripple cursor can leave
//! tracked positions stale, so the diff may emit moves whose `from`
//! indices do not replay as naive splices — only a move's `to` index is
//! contractual — and the splice result can then diverge from "after".
//! Reconcilers that mix multiple insertions with reorders should place
//! elements by target index rather than replay `from` splices. The
//! property suite pins down the exact classes.

use crate::element::Element;
use crate::op::MorphOp;

/// Apply `ops` to a copy of `before`, sourcing new content from `after`.
///
/// Operations must be applied in the order emitted. Deletion indices
/// reference the original "before" positions and are compensated as the
/// working copy shrinks.
///
/// # Panics
///
/// Panics if `ops` is inconsistent with the inputs (indices out of range
/// for the working copy or for `after`). Operation lists produced by
/// [`compute_diff`](crate::compute_diff) on the same `before`/`after`
/// pair are always consistent.
pub fn apply(before: &[Element], after: &[Element], ops: &[MorphOp]) -> Vec<Element> {
    let mut work: Vec<Element> = before.to_vec();
    // Deletions arrive in ascending original-index order; each removal
    // shifts the positions of the ones still pending.
    let mut removed = 0usize;
    for op in ops {
        match *op {
            MorphOp::Deletion { from } => {
                work.remove(from - removed);
                removed += 1;
            }
            MorphOp::Insertion { at } => {
                work.insert(at, after[at]);
            }
            MorphOp::Move { from, to } => {
                let element = work.remove(from);
                work.insert(to, element);
            }
            MorphOp::Update { at } => {
                work[at] = after[at];
            }
        }
    }
    work
}
