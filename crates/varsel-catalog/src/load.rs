use std::path::Path;

use crate::error::CatalogError;
use crate::types::ProductRecord;

/// Load a product record from a JSON file, or YAML when the extension is
/// `.yaml` / `.yml`.
///
/// # Errors
///
/// Returns `CatalogError` if the file cannot be read or parsed.
pub fn load_product(path: &Path) -> Result<ProductRecord, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let context = path.display().to_string();
    let product = if is_yaml {
        parse_product_yaml(&content, &context)?
    } else {
        parse_product_json(&content, &context)?
    };

    tracing::debug!(
        path = %context,
        product_id = product.id.as_deref().unwrap_or_default(),
        product_class = %product.product_class,
        "loaded product record"
    );
    Ok(product)
}

/// Parse a product record from JSON text.
///
/// # Errors
///
/// Returns [`CatalogError::Deserialize`] if the text is not a product record.
pub fn parse_product_json(content: &str, context: &str) -> Result<ProductRecord, CatalogError> {
    serde_json::from_str(content).map_err(|source| CatalogError::Deserialize {
        context: context.to_owned(),
        source,
    })
}

/// Parse a product record from YAML text.
///
/// # Errors
///
/// Returns [`CatalogError::DeserializeYaml`] if the text is not a product record.
pub fn parse_product_yaml(content: &str, context: &str) -> Result<ProductRecord, CatalogError> {
    serde_yaml::from_str(content).map_err(|source| CatalogError::DeserializeYaml {
        context: context.to_owned(),
        source,
    })
}
