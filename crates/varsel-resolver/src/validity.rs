//! Completeness and exact-match checks for a selection vector.

use varsel_core::{Axis, Combination, SelectionVector, Validity};

/// `true` iff the selection has exactly one non-empty slot per axis.
#[must_use]
pub fn is_complete(selection: &SelectionVector, axes: &[Axis]) -> bool {
    selection.len() == axes.len() && !selection.has_empty_slot()
}

/// `true` iff the selection has no empty slot and equals, element by element,
/// at least one valid combination.
#[must_use]
pub fn is_valid_combination(
    selection: &SelectionVector,
    valid_combinations: &[Combination],
) -> bool {
    if selection.has_empty_slot() {
        return false;
    }
    valid_combinations
        .iter()
        .any(|combination| combination.as_slice() == selection.as_slice())
}

/// Combines both checks into the flags reported to the container.
#[must_use]
pub fn evaluate(
    selection: &SelectionVector,
    axes: &[Axis],
    valid_combinations: &[Combination],
) -> Validity {
    Validity::new(
        is_complete(selection, axes),
        is_valid_combination(selection, valid_combinations),
    )
}
