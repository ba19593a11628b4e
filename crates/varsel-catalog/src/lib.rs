pub mod error;
pub mod load;
pub mod normalize;
pub mod types;

pub use error::CatalogError;
pub use load::{load_product, parse_product_json, parse_product_yaml};
pub use normalize::{normalize, normalize_product, selection_vector, NormalizedVariants};
pub use types::{
    AttributeInfo, AttributeInfoMap, MappingAttribute, ProductMapping, ProductRecord,
    SelectedAttributes, VariationAttributeSet, VariationInfo,
};
