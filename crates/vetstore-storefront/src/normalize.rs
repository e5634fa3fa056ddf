//! Normalization from Storefront wire types to [`vetstore_core::Product`].
//!
//! Discount pricing is delegated to [`crate::discount`]; this module handles
//! the structural conversion.

use vetstore_core::{Collection, DiscountSettings, Product, ProductImage, Variant};

use crate::discount::discount_variant;
use crate::price::format_price;
use crate::types::{CollectionNode, ProductNode, VariantNode};

/// Normalizes a raw [`ProductNode`] into a [`Product`], pricing every variant
/// against `settings`.
///
/// `collection` is the handle the catalog was filtered by, or empty.
#[must_use]
pub fn normalize_product(
    product: ProductNode,
    collection: &str,
    settings: &DiscountSettings,
) -> Product {
    let tags = product.tags;

    let variants = product
        .variants
        .into_nodes()
        .map(|variant| normalize_variant(variant, &tags, settings))
        .collect::<Vec<_>>();

    // The query asks for one image; anything beyond the first is ignored.
    let images = product
        .images
        .into_nodes()
        .take(1)
        .map(|image| ProductImage {
            url: image.url,
            alt_text: image.alt_text,
        })
        .collect();

    tracing::debug!(
        product = %product.handle,
        variants = variants.len(),
        discounted = variants.iter().filter(|v| v.discounted_price.is_some()).count(),
        "normalized product"
    );

    Product {
        id: product.id,
        title: product.title,
        handle: product.handle,
        tags,
        vendor: product.vendor.unwrap_or_default(),
        collection: collection.to_owned(),
        images,
        variants,
    }
}

fn normalize_variant(
    variant: VariantNode,
    tags: &[String],
    settings: &DiscountSettings,
) -> Variant {
    let applied = discount_variant(tags, &variant.price.amount, settings);
    let (discounted_price, discount_percentage) = applied
        .map(|a| (a.discounted_price, a.percentage))
        .unzip();

    Variant {
        id: variant.id,
        title: variant.title,
        sku: variant.sku.unwrap_or_default(),
        price: format_price(&variant.price.amount),
        currency_code: variant.price.currency_code.unwrap_or_default(),
        compare_at_price: variant
            .compare_at_price
            .filter(|money| !money.amount.trim().is_empty())
            .map(|money| format_price(&money.amount)),
        available_for_sale: variant.available_for_sale,
        discounted_price,
        discount_percentage,
    }
}

#[must_use]
pub fn normalize_collection(collection: CollectionNode) -> Collection {
    Collection {
        id: collection.id,
        handle: collection.handle,
        title: collection.title,
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
