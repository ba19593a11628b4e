pub mod app_config;
pub mod config;
pub mod product_class;
pub mod variants;

use thiserror::Error;

pub use app_config::{AppConfig, Environment, OutputStyle};
pub use config::{load_app_config, load_app_config_from_env};
pub use product_class::ProductClass;
pub use variants::{
    Axis, Combination, CombinationEntry, CombinationIndex, SelectionVector, Validity,
    VariantOption, KEY_DELIMITER,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
