#![forbid(unsafe_code)]

//! Reconciliation engine for keyed ordered collections.
//!
//! # Role
//! `listmorph` computes the ordered list of atomic edit operations —
//! deletion, insertion, move, update — that morphs one ordered collection
//! into another, where elements carry a stable 64-bit key and an optional
//! dirty flag. It is the kind of kernel that powers incremental list
//! rendering, synchronization of ordered records, or patch generation
//! between two snapshots of an ordered dataset.
//!
//! # Primary responsibilities
//! - **[`compute_diff`]**: the four-pass heuristic diff over an internal
//!   position-remap table.
//! - **[`compute_diff_checked`]**: the same diff behind a duplicate-key
//!   validation boundary.
//! - **[`apply`]**: sequential splice application of an emitted op list.
//! - **[`MorphOp`]**: the operation vocabulary, with driver-friendly
//!   `Display` output.
//!
//! # Guarantees
//! Pure, synchronous, and deterministic: no I/O, no shared state between
//! calls, identical inputs always produce the identical operation list.
//! The diff is a heuristic linear-plus-ripple pass, not an optimal
//! sequence-alignment solver.

pub mod apply;
pub mod diff;
pub mod element;
pub mod key_index;
pub mod op;
pub mod remap;
pub mod validate;

pub use apply::apply;
pub use diff::compute_diff;
pub use element::{Element, Key};
pub use op::MorphOp;
pub use validate::{DiffError, SequenceSide, compute_diff_checked};
