//! Variant availability, validity and the picker view model built on
//! normalized catalog data.

pub mod availability;
pub mod selection;
pub mod validity;

pub use availability::{available_options_at, is_consistent, AvailabilitySet};
pub use selection::{AxisView, OptionView, VariantSelected, VariantSelector};
pub use validity::{evaluate, is_complete, is_valid_combination};
