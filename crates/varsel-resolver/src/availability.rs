//! Which option values are still reachable on one axis, given the choices
//! made on the others.

use serde::{Deserialize, Serialize};
use varsel_core::{Combination, SelectionVector};

/// Option values reachable at one axis, deduplicated, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvailabilitySet(Vec<String>);

impl AvailabilitySet {
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|v| v == value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    fn insert(&mut self, value: &str) {
        if !self.contains(value) {
            self.0.push(value.to_owned());
        }
    }
}

/// Returns `true` if `combination` agrees with every chosen slot of
/// `selection` other than `axis_index`. Unchosen slots never block.
#[must_use]
pub fn is_consistent(
    combination: &Combination,
    axis_index: usize,
    selection: &SelectionVector,
) -> bool {
    combination.as_slice().iter().enumerate().all(|(i, value)| {
        let chosen = selection.slot(i);
        i == axis_index || chosen.is_empty() || chosen == value.as_str()
    })
}

/// Computes the option values at `axis_index` that appear in at least one
/// valid combination consistent with the rest of `selection`.
///
/// An empty result from an empty `valid_combinations` means "no constraint
/// data", not "nothing available"; callers decide how to treat it.
#[must_use]
pub fn available_options_at(
    axis_index: usize,
    selection: &SelectionVector,
    valid_combinations: &[Combination],
) -> AvailabilitySet {
    let mut available = AvailabilitySet::default();
    for combination in valid_combinations {
        let Some(value) = combination.get(axis_index) else {
            continue;
        };
        if is_consistent(combination, axis_index, selection) {
            available.insert(value);
        }
    }
    available
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combos(rows: &[&[&str]]) -> Vec<Combination> {
        rows.iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }

    fn selection(slots: &[&str]) -> SelectionVector {
        slots.iter().copied().collect()
    }

    fn shirt_combos() -> Vec<Combination> {
        combos(&[&["S", "Blue", "Cotton"], &["M", "Yellow", "Cotton"]])
    }

    #[test]
    fn chosen_color_narrows_material() {
        let available = available_options_at(2, &selection(&["", "Blue", ""]), &shirt_combos());
        assert_eq!(available.iter().collect::<Vec<_>>(), vec!["Cotton"]);
    }

    #[test]
    fn chosen_color_narrows_size() {
        let available = available_options_at(0, &selection(&["", "Blue", ""]), &shirt_combos());
        assert!(available.contains("S"));
        assert!(!available.contains("M"));
    }

    #[test]
    fn edited_axis_is_shown_in_full() {
        // Size is chosen as S, but editing Size itself must not filter Size.
        let available = available_options_at(0, &selection(&["S", "", ""]), &shirt_combos());
        assert_eq!(available.iter().collect::<Vec<_>>(), vec!["S", "M"]);
    }

    #[test]
    fn nothing_chosen_means_no_constraint() {
        let available = available_options_at(1, &SelectionVector::with_len(3), &shirt_combos());
        assert_eq!(available.iter().collect::<Vec<_>>(), vec!["Blue", "Yellow"]);
    }

    #[test]
    fn conflicting_choices_leave_nothing_available() {
        let available = available_options_at(2, &selection(&["S", "Yellow", ""]), &shirt_combos());
        assert!(available.is_empty());
    }

    #[test]
    fn duplicates_are_removed_keeping_first_occurrence() {
        let rows = combos(&[
            &["M", "Blue"],
            &["S", "Blue"],
            &["M", "Red"],
            &["L", "Blue"],
        ]);
        let available = available_options_at(0, &selection(&["", "Blue"]), &rows);
        assert_eq!(available.iter().collect::<Vec<_>>(), vec!["M", "S", "L"]);
        assert_eq!(available.len(), 3);
    }

    #[test]
    fn empty_combinations_yield_empty_set() {
        let available = available_options_at(0, &selection(&["S", "Blue", "Cotton"]), &[]);
        assert!(available.is_empty());
    }

    #[test]
    fn short_selection_vector_does_not_block() {
        let available = available_options_at(2, &selection(&["S"]), &shirt_combos());
        assert_eq!(available.iter().collect::<Vec<_>>(), vec!["Cotton"]);
    }

    #[test]
    fn axis_past_combination_length_contributes_nothing() {
        let available = available_options_at(5, &SelectionVector::with_len(3), &shirt_combos());
        assert!(available.is_empty());
    }

    #[test]
    fn matches_set_definition_for_every_axis_and_selection() {
        let rows = combos(&[
            &["S", "Blue", "Cotton"],
            &["S", "Red", "Wool"],
            &["M", "Blue", "Wool"],
            &["L", "Red", "Cotton"],
        ]);
        let slots = [
            ["", "", ""],
            ["S", "", ""],
            ["", "Blue", ""],
            ["", "", "Wool"],
            ["S", "Red", ""],
            ["M", "Blue", "Wool"],
            ["L", "Blue", "Cotton"],
        ];
        for slot in &slots {
            let sel = selection(slot);
            for axis in 0..3 {
                let expected: Vec<&str> = rows
                    .iter()
                    .filter(|c| {
                        (0..3).all(|j| j == axis || slot[j].is_empty() || c.get(j) == Some(slot[j]))
                    })
                    .filter_map(|c| c.get(axis))
                    .fold(Vec::new(), |mut acc, v| {
                        if !acc.contains(&v) {
                            acc.push(v);
                        }
                        acc
                    });
                let available = available_options_at(axis, &sel, &rows);
                let actual: Vec<&str> = available.iter().collect();
                assert_eq!(actual, expected, "axis {axis}, selection {slot:?}");
            }
        }
    }
}
