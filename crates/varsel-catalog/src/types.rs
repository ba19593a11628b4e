//! Catalog wire types for a product record, as delivered by the storefront's
//! product detail data source.
//!
//! ## Observed shape
//!
//! ### `variationInfo.variationAttributeInfo`
//! An object keyed by attribute api name (e.g. `"Size__c"`). Values may be
//! `null` for attributes the shopper cannot vary; those entries are dropped
//! during normalization. `sequence` drives axis order, `availableValues`
//! lists the options in display order.
//!
//! ### `variationAttributeSet.attributes`
//! The attribute values of the product currently being viewed, keyed by the
//! same api names. Absent on `VariationParent` records that have not been
//! narrowed to a child yet.
//!
//! ### `variationInfo.attributesToProductMappings`
//! One entry per sellable child product: `canonicalKey` (the values joined
//! by `_` in axis order), `productId`, the attribute values that make up the
//! combination and an optional `urlName` slug. Entries missing the key or
//! the product id are skipped during normalization.
//!
//! Every field is optional on the wire; missing data degrades to empty
//! structures rather than a parse failure.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use varsel_core::ProductClass;

/// Attribute api name -> attribute definition (`null` when not variable).
pub type AttributeInfoMap = BTreeMap<String, Option<AttributeInfo>>;

/// Attribute api name -> currently selected value.
pub type SelectedAttributes = BTreeMap<String, Option<String>>;

/// A product detail record. Only the fields the variant selector reads are
/// modelled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    #[serde(default)]
    pub id: Option<String>,

    /// Missing or `null` classes are treated as `Simple`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_class: ProductClass,

    #[serde(default)]
    pub variation_info: Option<VariationInfo>,

    #[serde(default)]
    pub variation_attribute_set: Option<VariationAttributeSet>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariationInfo {
    #[serde(default)]
    pub variation_attribute_info: Option<AttributeInfoMap>,

    #[serde(default)]
    pub attributes_to_product_mappings: Option<Vec<ProductMapping>>,
}

/// Definition of one variation attribute (one axis).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeInfo {
    #[serde(default)]
    pub api_name: Option<String>,

    /// Display label, e.g. `"Size"`.
    #[serde(default)]
    pub label: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub sequence: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub available_values: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariationAttributeSet {
    #[serde(default)]
    pub attributes: Option<SelectedAttributes>,
}

/// One sellable child product and the attribute values that select it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductMapping {
    /// Values joined by `_` in axis order, e.g. `"S_Blue_Cotton"`.
    #[serde(default)]
    pub canonical_key: Option<String>,

    #[serde(default)]
    pub product_id: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub selected_attributes: Vec<MappingAttribute>,

    /// URL slug of the child product page.
    #[serde(default)]
    pub url_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingAttribute {
    #[serde(default)]
    pub api_name: Option<String>,

    #[serde(default)]
    pub label: Option<String>,

    #[serde(default)]
    pub sequence: Option<i64>,

    /// A mapping with any attribute lacking a value is skipped.
    #[serde(default)]
    pub value: Option<String>,
}

/// Reads an explicit `null` as the field's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ProductRecord {
    #[must_use]
    pub fn attribute_info(&self) -> Option<&AttributeInfoMap> {
        self.variation_info
            .as_ref()
            .and_then(|v| v.variation_attribute_info.as_ref())
    }

    #[must_use]
    pub fn selected_attributes(&self) -> Option<&SelectedAttributes> {
        self.variation_attribute_set
            .as_ref()
            .and_then(|s| s.attributes.as_ref())
    }

    #[must_use]
    pub fn mappings(&self) -> Option<&[ProductMapping]> {
        self.variation_info
            .as_ref()
            .and_then(|v| v.attributes_to_product_mappings.as_deref())
    }
}
