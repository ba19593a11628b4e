//! End-to-end checks of normalization, availability and validity working
//! together on catalog-shaped input.

use serde_json::json;

use varsel_catalog::{normalize, normalize_product, ProductRecord};
use varsel_core::SelectionVector;
use varsel_resolver::{available_options_at, evaluate, is_valid_combination, VariantSelector};

fn hoodie() -> ProductRecord {
    serde_json::from_value(json!({
        "id": "01tHoodie",
        "productClass": "Variation",
        "variationInfo": {
            "variationAttributeInfo": {
                "Color__c": { "label": "Color", "sequence": 1, "availableValues": ["Red", "Black"] },
                "Size__c": { "label": "Size", "sequence": 0, "availableValues": ["Large", "Small"] }
            },
            "attributesToProductMappings": [
                {
                    "canonicalKey": "Large_Red",
                    "productId": "01tLR",
                    "urlName": "hoodie-large-red",
                    "selectedAttributes": [
                        { "apiName": "Color__c", "value": "Red" },
                        { "apiName": "Size__c", "value": "Large" }
                    ]
                },
                {
                    "canonicalKey": "Small_Black",
                    "productId": "01tSB",
                    "selectedAttributes": [
                        { "apiName": "Size__c", "value": "Small" },
                        { "apiName": "Color__c", "value": "Black" }
                    ]
                },
                { "canonicalKey": "Small_Red" },
                { "productId": "01tOrphan" }
            ]
        },
        "variationAttributeSet": { "attributes": { "Color__c": "Red", "Size__c": "Large" } }
    }))
    .expect("fixture should deserialize")
}

#[test]
fn selected_values_follow_axis_sequence() {
    let normalized = normalize_product(&hoodie()).unwrap();
    assert_eq!(normalized.selected, vec!["Large", "Red"]);
    assert_eq!(normalized.axes[0].label, "Size");
    assert_eq!(normalized.axes[1].label, "Color");
}

#[test]
fn every_valid_combination_round_trips_through_its_key() {
    let normalized = normalize_product(&hoodie()).unwrap();
    assert_eq!(normalized.valid_combinations.len(), 2);

    for combination in &normalized.valid_combinations {
        let selection: SelectionVector = combination.as_slice().iter().cloned().collect();
        let entry = normalized
            .combination_index
            .get(&selection.canonical_key())
            .expect("key built from a valid combination resolves");
        assert_eq!(&entry.attributes, combination);
        assert!(is_valid_combination(&selection, &normalized.valid_combinations));
    }
}

#[test]
fn availability_narrows_by_other_axes() {
    let normalized = normalize_product(&hoodie()).unwrap();
    let selection: SelectionVector = ["Small", ""].into_iter().collect();
    let colors = available_options_at(1, &selection, &normalized.valid_combinations);
    assert_eq!(colors.iter().collect::<Vec<_>>(), vec!["Black"]);
}

#[test]
fn picker_walkthrough_switches_between_variants() {
    let mut selector = VariantSelector::for_product(&hoodie()).unwrap();
    assert_eq!(selector.notification().product_id.as_deref(), Some("01tLR"));

    let event = selector.change(0, "Small").unwrap();
    assert!(!event.is_valid);
    assert!(event.product_id.is_none());

    let event = selector.change(1, "Black").unwrap();
    assert!(event.is_valid);
    assert_eq!(event.product_id.as_deref(), Some("01tSB"));
    assert!(event.url_name.is_none());
}

#[test]
fn empty_catalog_data_never_validates() {
    let normalized = normalize(None, None, None);
    assert!(normalized.axes.is_empty());
    assert!(normalized.valid_combinations.is_empty());

    for slots in [vec!["Large"], vec!["Large", "Red"], vec![""]] {
        let selection: SelectionVector = slots.into_iter().collect();
        let validity = evaluate(&selection, &normalized.axes, &normalized.valid_combinations);
        assert!(!validity.valid);
    }
}
