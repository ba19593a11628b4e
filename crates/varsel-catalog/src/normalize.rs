//! Normalization from raw catalog variation data to the ordered axis and
//! combination structures the resolver works on.
//!
//! Nothing here fails: missing or malformed input degrades to empty
//! structures, and skipped entries are only traced.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use varsel_core::{
    Axis, Combination, CombinationEntry, CombinationIndex, SelectionVector, VariantOption,
};

use crate::types::{AttributeInfoMap, ProductMapping, ProductRecord, SelectedAttributes};

/// Axis, selection and combination data rebuilt in full for one product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedVariants {
    /// Sorted ascending by sequence.
    pub axes: Vec<Axis>,
    /// Selected values for the axes the raw selection covers, in axis order.
    pub selected: Vec<String>,
    pub combination_index: CombinationIndex,
    /// The `attributes` of every index entry, in insertion order.
    pub valid_combinations: Vec<Combination>,
}

/// Normalizes raw variation data.
///
/// `selected` only lists values for attributes present in both
/// `attribute_info` and `selected_attributes`; use [`selection_vector`] for a
/// slot-per-axis view.
#[must_use]
pub fn normalize(
    attribute_info: Option<&AttributeInfoMap>,
    selected_attributes: Option<&SelectedAttributes>,
    mappings: Option<&[ProductMapping]>,
) -> NormalizedVariants {
    let axes = attribute_info.map(build_axes).unwrap_or_default();
    let selected = match (attribute_info, selected_attributes) {
        (Some(info), Some(attrs)) => build_selected(info, attrs),
        _ => Vec::new(),
    };
    let sequences = attribute_info.map(axis_sequences).unwrap_or_default();
    let combination_index = mappings
        .map(|m| build_combination_index(m, &sequences))
        .unwrap_or_default();
    let valid_combinations = combination_index.combinations();

    NormalizedVariants {
        axes,
        selected,
        combination_index,
        valid_combinations,
    }
}

/// Normalizes the variation data of a full product record.
///
/// Returns `None` when the product class does not engage variant selection.
#[must_use]
pub fn normalize_product(product: &ProductRecord) -> Option<NormalizedVariants> {
    if !product.product_class.engages_variant_selection() {
        tracing::debug!(
            product_id = product.id.as_deref().unwrap_or_default(),
            product_class = %product.product_class,
            "product class does not engage variant selection"
        );
        return None;
    }

    Some(normalize(
        product.attribute_info(),
        product.selected_attributes(),
        product.mappings(),
    ))
}

/// Builds a selection vector with one slot per axis, leaving `""` where the
/// raw selection has no value for that axis.
#[must_use]
pub fn selection_vector(
    axes: &[Axis],
    selected_attributes: Option<&SelectedAttributes>,
) -> SelectionVector {
    axes.iter()
        .map(|axis| {
            selected_attributes
                .and_then(|attrs| attrs.get(&axis.id))
                .and_then(Option::as_deref)
                .unwrap_or_default()
                .to_owned()
        })
        .collect()
}

fn build_axes(info: &AttributeInfoMap) -> Vec<Axis> {
    let mut axes: Vec<Axis> = info
        .iter()
        .filter_map(|(key, attribute)| {
            let Some(attribute) = attribute else {
                tracing::debug!(attribute = %key, "dropping empty attribute definition");
                return None;
            };
            Some(Axis {
                id: key.clone(),
                label: attribute
                    .label
                    .clone()
                    .filter(|l| !l.is_empty())
                    .unwrap_or_else(|| key.clone()),
                sequence: attribute.sequence,
                options: attribute
                    .available_values
                    .iter()
                    .map(VariantOption::from_value)
                    .collect(),
            })
        })
        .collect();

    // Stable: equal sequences keep api-name order.
    axes.sort_by_key(|axis| axis.sequence);
    axes
}

fn axis_sequences(info: &AttributeInfoMap) -> HashMap<&str, i64> {
    info.iter()
        .filter_map(|(key, attribute)| attribute.as_ref().map(|a| (key.as_str(), a.sequence)))
        .collect()
}

fn build_selected(info: &AttributeInfoMap, attrs: &SelectedAttributes) -> Vec<String> {
    let mut pairs: Vec<(i64, &str)> = attrs
        .iter()
        .filter_map(|(key, value)| {
            let sequence = info.get(key)?.as_ref()?.sequence;
            Some((sequence, value.as_deref()?))
        })
        .collect();
    pairs.sort_by_key(|&(sequence, _)| sequence);
    pairs.into_iter().map(|(_, value)| value.to_owned()).collect()
}

fn build_combination_index(
    mappings: &[ProductMapping],
    sequences: &HashMap<&str, i64>,
) -> CombinationIndex {
    let mut index = CombinationIndex::new();

    for mapping in mappings {
        let (Some(key), Some(product_id)) = (
            mapping.canonical_key.as_deref().filter(|k| !k.is_empty()),
            mapping.product_id.as_deref().filter(|p| !p.is_empty()),
        ) else {
            tracing::debug!(
                canonical_key = mapping.canonical_key.as_deref().unwrap_or_default(),
                product_id = mapping.product_id.as_deref().unwrap_or_default(),
                "skipping product mapping without key or product id"
            );
            continue;
        };

        let Some(attributes) = ordered_values(mapping, sequences) else {
            tracing::debug!(
                canonical_key = key,
                product_id,
                "skipping product mapping with a valueless attribute"
            );
            continue;
        };

        let entry = CombinationEntry {
            product_id: product_id.to_owned(),
            attributes,
            url_name: mapping.url_name.clone().filter(|u| !u.is_empty()),
        };
        if index.insert(key.to_owned(), entry).is_some() {
            tracing::debug!(canonical_key = key, "duplicate canonical key overwritten");
        }
    }

    index
}

/// Orders a mapping's values by attribute sequence. A value's sequence comes
/// from the mapping itself, else from the axis with the same api name; if any
/// value has neither, source order is kept. `None` if any attribute has no
/// value.
fn ordered_values(
    mapping: &ProductMapping,
    sequences: &HashMap<&str, i64>,
) -> Option<Combination> {
    let mut values = mapping
        .selected_attributes
        .iter()
        .map(|attr| {
            let sequence = attr.sequence.or_else(|| {
                attr.api_name
                    .as_deref()
                    .and_then(|name| sequences.get(name).copied())
            });
            Some((sequence, attr.value.as_deref()?))
        })
        .collect::<Option<Vec<(Option<i64>, &str)>>>()?;

    if values.iter().all(|(sequence, _)| sequence.is_some()) {
        values.sort_by_key(|&(sequence, _)| sequence);
    }
    Some(values.into_iter().map(|(_, value)| value).collect())
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
