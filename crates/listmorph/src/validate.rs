//! Boundary validation for diff inputs.
//!
//! [`compute_diff`](crate::compute_diff) tolerates duplicate keys with
//! deterministic first-occurrence semantics. Callers that want a hard
//! contract use [`compute_diff_checked`], which rejects the first
//! duplicate found in either input before running any pass.

use crate::diff::compute_diff;
use crate::element::{Element, Key};
use crate::op::MorphOp;
use ahash::AHashMap;
use std::fmt;

/// Which input sequence an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceSide {
    Before,
    After,
}

impl fmt::Display for SequenceSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Before => write!(f, "before"),
            Self::After => write!(f, "after"),
        }
    }
}

/// Errors rejecting malformed diff inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// A key occurred twice within one input sequence.
    DuplicateKey {
        side: SequenceSide,
        key: Key,
        first: usize,
        second: usize,
    },
}

impl fmt::Display for DiffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateKey {
                side,
                key,
                first,
                second,
            } => write!(
                f,
                "duplicate key {key} in {side} sequence at positions {first} and {second}"
            ),
        }
    }
}

impl std::error::Error for DiffError {}

/// Compute the diff after verifying key uniqueness in both inputs.
///
/// Returns the first duplicate found, scanning `before` then `after`
/// front to back.
pub fn compute_diff_checked(
    before: &[Element],
    after: &[Element],
) -> Result<Vec<MorphOp>, DiffError> {
    check_unique(before, SequenceSide::Before)?;
    check_unique(after, SequenceSide::After)?;
    Ok(compute_diff(before, after))
}

fn check_unique(sequence: &[Element], side: SequenceSide) -> Result<(), DiffError> {
    let mut seen: AHashMap<Key, usize> = AHashMap::with_capacity(sequence.len());
    for (i, element) in sequence.iter().enumerate() {
        if let Some(&first) = seen.get(&element.key) {
            return Err(DiffError::DuplicateKey {
                side,
                key: element.key,
                first,
                second: i,
            });
        }
        seen.insert(element.key, i);
    }
    Ok(())
}
