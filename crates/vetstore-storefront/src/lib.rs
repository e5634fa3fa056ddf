pub mod client;
pub mod discount;
pub mod error;
pub mod normalize;
pub mod price;
pub mod queries;
pub mod transport;
pub mod types;

pub use client::StorefrontClient;
pub use discount::{apply_discount, classify, classify_category, DiscountCategory};
pub use error::StorefrontError;
pub use normalize::normalize_product;
pub use price::format_price;
pub use transport::{GraphqlRequest, GraphqlTransport, HttpTransport};
