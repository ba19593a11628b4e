use serde::{Deserialize, Serialize};

/// Catalog classification of a product record.
///
/// Only variation products carry the axis/combination data the selector
/// works on; everything else is rendered without a variant picker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductClass {
    #[default]
    Simple,
    Variation,
    VariationParent,
    Set,
    Kit,
    Bundle,
    #[serde(other)]
    Other,
}

impl ProductClass {
    /// Returns `true` for the classes that engage variant selection.
    #[must_use]
    pub const fn engages_variant_selection(self) -> bool {
        matches!(self, ProductClass::Variation | ProductClass::VariationParent)
    }
}

impl std::fmt::Display for ProductClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductClass::Simple => write!(f, "Simple"),
            ProductClass::Variation => write!(f, "Variation"),
            ProductClass::VariationParent => write!(f, "VariationParent"),
            ProductClass::Set => write!(f, "Set"),
            ProductClass::Kit => write!(f, "Kit"),
            ProductClass::Bundle => write!(f, "Bundle"),
            ProductClass::Other => write!(f, "Other"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variation_classes_engage_selection() {
        assert!(ProductClass::Variation.engages_variant_selection());
        assert!(ProductClass::VariationParent.engages_variant_selection());
    }

    #[test]
    fn other_classes_do_not_engage_selection() {
        for class in [
            ProductClass::Simple,
            ProductClass::Set,
            ProductClass::Kit,
            ProductClass::Bundle,
            ProductClass::Other,
        ] {
            assert!(!class.engages_variant_selection(), "{class} engaged");
        }
    }

    #[test]
    fn deserializes_known_class_names() {
        let class: ProductClass = serde_json::from_str("\"VariationParent\"").unwrap();
        assert_eq!(class, ProductClass::VariationParent);
    }

    #[test]
    fn unknown_class_name_maps_to_other() {
        let class: ProductClass = serde_json::from_str("\"Subscription\"").unwrap();
        assert_eq!(class, ProductClass::Other);
    }
}
