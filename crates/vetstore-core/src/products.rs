use serde::{Deserialize, Serialize};

/// A catalog product normalized for the presentation layer.
///
/// Field names serialize in camelCase to match what storefront templates
/// consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Storefront global ID, e.g. `"gid://shopify/Product/123"`.
    pub id: String,
    pub title: String,
    pub handle: String,
    /// Tags in the order the storefront returned them.
    pub tags: Vec<String>,
    pub vendor: String,
    /// Collection handle used to fetch this product, or empty when the
    /// catalog was fetched unfiltered.
    pub collection: String,
    pub images: Vec<ProductImage>,
    pub variants: Vec<Variant>,
}

impl Product {
    /// Returns `true` if at least one variant is currently available for purchase.
    #[must_use]
    pub fn has_available_variants(&self) -> bool {
        self.variants.iter().any(|v| v.available_for_sale)
    }

    /// Returns `true` if any variant carries a computed discount.
    #[must_use]
    pub fn is_discounted(&self) -> bool {
        self.variants.iter().any(|v| v.discounted_price.is_some())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    pub url: String,
    pub alt_text: Option<String>,
}

/// A purchasable configuration of a [`Product`] with display pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub id: String,
    pub title: String,
    /// Empty when the storefront returns no SKU.
    pub sku: String,
    /// Formatted display price, e.g. `"1,280.00"`.
    pub price: String,
    /// ISO 4217 code of `price`, empty when the storefront omits it.
    pub currency_code: String,
    pub compare_at_price: Option<String>,
    pub available_for_sale: bool,
    /// Present iff a non-zero discount percentage applied.
    pub discounted_price: Option<String>,
    pub discount_percentage: Option<f64>,
}

/// A named product grouping, referenced by handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    pub handle: String,
    pub title: String,
}
