use serde::Serialize;
use varsel_core::{OutputStyle, SelectionVector, Validity};
use varsel_resolver::{AvailabilitySet, AxisView, VariantSelected};

#[derive(Debug, Serialize)]
pub struct AvailabilityReport<'a> {
    pub axis: &'a str,
    pub selection: &'a SelectionVector,
    pub available: &'a AvailabilitySet,
}

#[derive(Debug, Serialize)]
pub struct ResolveReport<'a> {
    pub events: &'a [VariantSelected],
    pub current: &'a VariantSelected,
    pub validity: Validity,
    pub axes: &'a [AxisView],
}

pub fn render_json<T: Serialize>(style: OutputStyle, value: &T) -> serde_json::Result<String> {
    match style {
        OutputStyle::Pretty => serde_json::to_string_pretty(value),
        OutputStyle::Compact => serde_json::to_string(value),
    }
}
