//! The variant picker's view model.
//!
//! [`VariantSelector`] holds the normalized catalog data of one product plus
//! two vectors of choices:
//!
//! - `selection`: the stored selection vector. Seeded from the product
//!   record, written by every change, and replaced when the container syncs
//!   a new selection (e.g. after navigating to the resolved child product).
//! - `choices`: what each dropdown currently shows. Written by every change,
//!   and only overwritten by a sync where the synced slot is non-empty.
//!
//! While `selection` is partly filled the dropdowns can be ahead of it, so
//! the `selected` flags fall back to `choices` in that state. Notifications
//! and validity are always computed from `choices`.

use serde::{Deserialize, Serialize};
use varsel_catalog::{normalize_product, selection_vector, NormalizedVariants, ProductRecord};
use varsel_core::{Axis, CombinationEntry, SelectionVector, Validity};

use crate::availability::{available_options_at, AvailabilitySet};
use crate::validity;

/// Notification sent to the container whenever the shopper's choice set
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantSelected {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    pub is_valid: bool,
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_name: Option<String>,
}

/// One option as rendered in its dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
    pub disabled: bool,
}

/// One axis as rendered: its dropdown and the options in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisView {
    pub id: String,
    pub label: String,
    pub options: Vec<OptionView>,
}

/// The last computed availability and the axis it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
struct StoredAvailability {
    axis_index: usize,
    available: AvailabilitySet,
}

#[derive(Debug, Clone)]
pub struct VariantSelector {
    variants: NormalizedVariants,
    selection: SelectionVector,
    choices: SelectionVector,
    availability: Option<StoredAvailability>,
}

impl VariantSelector {
    /// Builds a selector for freshly normalized product data. `selection` is
    /// fitted to one slot per axis.
    #[must_use]
    pub fn new(variants: NormalizedVariants, selection: &SelectionVector) -> Self {
        let selection = fit_to_axes(selection, variants.axes.len());
        Self {
            choices: selection.clone(),
            selection,
            variants,
            availability: None,
        }
    }

    /// Builds a selector from a product record, or `None` when the product
    /// class has no variant picker.
    #[must_use]
    pub fn for_product(product: &ProductRecord) -> Option<Self> {
        let variants = normalize_product(product)?;
        let selection = selection_vector(&variants.axes, product.selected_attributes());
        Some(Self::new(variants, &selection))
    }

    /// The product changed: rebuild everything from the new data.
    pub fn reset(&mut self, variants: NormalizedVariants, selection: &SelectionVector) {
        *self = Self::new(variants, selection);
    }

    #[must_use]
    pub fn axes(&self) -> &[Axis] {
        &self.variants.axes
    }

    #[must_use]
    pub fn variants(&self) -> &NormalizedVariants {
        &self.variants
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionVector {
        &self.selection
    }

    #[must_use]
    pub fn choices(&self) -> &SelectionVector {
        &self.choices
    }

    /// Index of the axis with api name `id`.
    #[must_use]
    pub fn axis_index(&self, id: &str) -> Option<usize> {
        self.variants.axes.iter().position(|axis| axis.id == id)
    }

    /// The stored availability set and the axis it was computed for.
    #[must_use]
    pub fn availability(&self) -> Option<(usize, &AvailabilitySet)> {
        self.availability
            .as_ref()
            .map(|stored| (stored.axis_index, &stored.available))
    }

    /// The shopper opened the dropdown of `axis_index`: recompute what it may
    /// offer. Returns `false` if the index is out of range.
    pub fn focus(&mut self, axis_index: usize) -> bool {
        if axis_index >= self.variants.axes.len() {
            tracing::warn!(
                axis_index,
                axes = self.variants.axes.len(),
                "focus on unknown axis ignored"
            );
            return false;
        }
        self.refresh_availability(axis_index);
        true
    }

    /// The shopper picked `value` on `axis_index` (an empty value clears the
    /// slot). Returns the notification for the container, or `None` if the
    /// index is out of range.
    pub fn change(&mut self, axis_index: usize, value: &str) -> Option<VariantSelected> {
        if !self.selection.set(axis_index, value) {
            tracing::warn!(
                axis_index,
                axes = self.variants.axes.len(),
                "change on unknown axis ignored"
            );
            return None;
        }
        self.choices.set(axis_index, value);
        self.refresh_availability(axis_index);

        let event = self.notification();
        tracing::debug!(
            axis_index,
            value,
            product_id = event.product_id.as_deref().unwrap_or_default(),
            is_valid = event.is_valid,
            "variant selection changed"
        );
        Some(event)
    }

    /// The container pushed a selection vector. Raw choices keep their value
    /// wherever the pushed slot is empty.
    pub fn sync_selection(&mut self, selection: &SelectionVector) {
        self.selection = fit_to_axes(selection, self.variants.axes.len());
        for (index, value) in self.selection.as_slice().iter().enumerate() {
            if !value.is_empty() {
                self.choices.set(index, value.as_str());
            }
        }
        self.availability = None;
    }

    /// Validity of the current choices.
    #[must_use]
    pub fn validity(&self) -> Validity {
        validity::evaluate(
            &self.choices,
            &self.variants.axes,
            &self.variants.valid_combinations,
        )
    }

    /// The catalog entry the current choices resolve to, if any.
    #[must_use]
    pub fn resolved(&self) -> Option<&CombinationEntry> {
        self.variants
            .combination_index
            .get(&self.choices.canonical_key())
    }

    /// The notification describing the current choices.
    #[must_use]
    pub fn notification(&self) -> VariantSelected {
        let resolved = self.resolved();
        VariantSelected {
            product_id: resolved.map(|entry| entry.product_id.clone()),
            is_valid: self.validity().valid,
            options: self.choices.as_slice().to_vec(),
            url_name: resolved.and_then(|entry| entry.url_name.clone()),
        }
    }

    /// Per-option `selected` / `disabled` flags for every axis.
    ///
    /// An option is disabled iff an availability set is stored, it belongs
    /// to another axis than the one the set was computed for, and its value
    /// is not in the set.
    #[must_use]
    pub fn axes_view(&self) -> Vec<AxisView> {
        let reference = if self.selection.is_mixed() {
            &self.choices
        } else {
            &self.selection
        };

        self.variants
            .axes
            .iter()
            .enumerate()
            .map(|(index, axis)| AxisView {
                id: axis.id.clone(),
                label: axis.label.clone(),
                options: axis
                    .options
                    .iter()
                    .map(|option| OptionView {
                        value: option.value.clone(),
                        label: option.label.clone(),
                        selected: reference.slot(index) == option.value,
                        disabled: self.availability.as_ref().is_some_and(|stored| {
                            stored.axis_index != index && !stored.available.contains(&option.value)
                        }),
                    })
                    .collect(),
            })
            .collect()
    }

    fn refresh_availability(&mut self, axis_index: usize) {
        // Without combination data there is nothing to constrain against.
        if self.variants.valid_combinations.is_empty() {
            self.availability = None;
            return;
        }
        let available = available_options_at(
            axis_index,
            &self.selection,
            &self.variants.valid_combinations,
        );
        self.availability = Some(StoredAvailability {
            axis_index,
            available,
        });
    }
}

fn fit_to_axes(selection: &SelectionVector, axis_count: usize) -> SelectionVector {
    (0..axis_count).map(|index| selection.slot(index)).collect()
}

#[cfg(test)]
#[path = "selection_test.rs"]
mod tests;
