pub mod app_config;
pub mod config;
pub mod discounts;
pub mod products;

pub use app_config::{
    StoreConfig, DEFAULT_API_VERSION, DEFAULT_DISCOUNT_METAOBJECT_ID,
    DEFAULT_DISCOUNT_METAOBJECT_TYPE,
};
pub use config::{load_store_config, load_store_config_from_env};
pub use discounts::DiscountSettings;
pub use products::{Collection, Product, ProductImage, Variant};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
