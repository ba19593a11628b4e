//! Domain types for variant selection: axes, options, combinations and the
//! shopper's in-progress selection.
//!
//! Every ordered structure here (combinations, selection vectors) uses the
//! axis order fixed at normalization time, ascending by axis sequence.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Delimiter joining option values into a canonical combination key,
/// e.g. `"S_Blue_Cotton"`.
pub const KEY_DELIMITER: &str = "_";

/// One value on an [`Axis`], e.g. `"Red"` on `"Color"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantOption {
    /// Unique within its axis.
    pub value: String,
    pub label: String,
}

impl VariantOption {
    /// Builds an option whose label is its value, the way catalog
    /// `availableValues` are presented.
    #[must_use]
    pub fn from_value(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}

/// An ordered dimension of choice, e.g. `"Size"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Axis {
    /// Catalog api name of the attribute, e.g. `"Size__c"`.
    pub id: String,
    pub label: String,
    /// Canonical ordering key; axes are sorted ascending by it.
    pub sequence: i64,
    pub options: Vec<VariantOption>,
}

impl Axis {
    /// Returns `true` if `value` is one of this axis's options.
    #[must_use]
    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }
}

/// One full, ordered tuple of option values: a single sellable variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Combination(Vec<String>);

impl Combination {
    #[must_use]
    pub fn new(values: Vec<String>) -> Self {
        Self(values)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Joins the values with [`KEY_DELIMITER`].
    #[must_use]
    pub fn canonical_key(&self) -> String {
        self.0.join(KEY_DELIMITER)
    }
}

impl<S: Into<String>> FromIterator<S> for Combination {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// What a canonical key resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinationEntry {
    pub product_id: String,
    pub attributes: Combination,
    /// Storefront URL slug of the variant product, when the catalog has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_name: Option<String>,
}

/// Wire form of one index slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyedEntry {
    pub key: String,
    #[serde(flatten)]
    pub entry: CombinationEntry,
}

/// Canonical key -> [`CombinationEntry`].
///
/// Iterates in first-insertion order. Re-inserting a key replaces the entry
/// in place (last write wins).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<KeyedEntry>", into = "Vec<KeyedEntry>")]
pub struct CombinationIndex {
    entries: Vec<KeyedEntry>,
    positions: HashMap<String, usize>,
}

impl CombinationIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `entry` under `key`, returning the entry it replaced.
    pub fn insert(&mut self, key: String, entry: CombinationEntry) -> Option<CombinationEntry> {
        if let Some(&pos) = self.positions.get(&key) {
            return Some(std::mem::replace(&mut self.entries[pos].entry, entry));
        }
        self.positions.insert(key.clone(), self.entries.len());
        self.entries.push(KeyedEntry { key, entry });
        None
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CombinationEntry> {
        self.positions.get(key).map(|&pos| &self.entries[pos].entry)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CombinationEntry)> {
        self.entries.iter().map(|e| (e.key.as_str(), &e.entry))
    }

    /// The `attributes` of every entry, in insertion order.
    #[must_use]
    pub fn combinations(&self) -> Vec<Combination> {
        self.entries
            .iter()
            .map(|e| e.entry.attributes.clone())
            .collect()
    }
}

impl From<Vec<KeyedEntry>> for CombinationIndex {
    fn from(entries: Vec<KeyedEntry>) -> Self {
        let mut index = Self::new();
        for KeyedEntry { key, entry } in entries {
            index.insert(key, entry);
        }
        index
    }
}

impl From<CombinationIndex> for Vec<KeyedEntry> {
    fn from(index: CombinationIndex) -> Self {
        index.entries
    }
}

/// The shopper's current choice per axis; `""` marks an unchosen slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionVector(Vec<String>);

impl SelectionVector {
    /// A vector of `len` unchosen slots.
    #[must_use]
    pub fn with_len(len: usize) -> Self {
        Self(vec![String::new(); len])
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The value at `index`; slots past the end read as unchosen.
    #[must_use]
    pub fn slot(&self, index: usize) -> &str {
        self.0.get(index).map_or("", String::as_str)
    }

    /// Writes `value` into slot `index`. Returns `false` when out of range;
    /// the vector is never grown or reordered.
    pub fn set(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.0.get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn has_empty_slot(&self) -> bool {
        self.0.iter().any(String::is_empty)
    }

    /// `true` when at least one slot is chosen and at least one is not.
    #[must_use]
    pub fn is_mixed(&self) -> bool {
        self.has_empty_slot() && self.0.iter().any(|s| !s.is_empty())
    }

    /// Joins the slots with [`KEY_DELIMITER`].
    #[must_use]
    pub fn canonical_key(&self) -> String {
        self.0.join(KEY_DELIMITER)
    }
}

impl From<Vec<String>> for SelectionVector {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

impl<S: Into<String>> FromIterator<S> for SelectionVector {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Constraint-validation state of a selection, mirroring the browser's
/// `ValidityState` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Validity {
    /// Some axis has no choice.
    pub value_missing: bool,
    /// The choices match no valid combination.
    pub bad_input: bool,
    pub valid: bool,
}

impl Validity {
    #[must_use]
    pub fn new(complete: bool, matches_combination: bool) -> Self {
        Self {
            value_missing: !complete,
            bad_input: !matches_combination,
            valid: complete && matches_combination,
        }
    }
}
