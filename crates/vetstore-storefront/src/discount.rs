//! Tag-driven discount selection and price computation.
//!
//! Pure and synchronous: nothing here touches the network, so every rule can
//! be exercised directly against a [`DiscountSettings`] value.
//!
//! A product falls into exactly one category, checked in order:
//!
//! 1. any tag contains [`PRESCRIPTION_MARKER`] and prescription is enabled
//! 2. any tag contains [`PARASITE_MARKER`] and parasite is enabled
//! 3. default is enabled
//!
//! Matching is a raw substring test on the tag text, with no case folding or
//! trimming.

use vetstore_core::DiscountSettings;

use crate::price::{format_amount, parse_amount};

/// Tag marker for prescription diets.
pub const PRESCRIPTION_MARKER: &str = "處方糧";

/// Tag marker for deworming and flea/tick products.
pub const PARASITE_MARKER: &str = "驅蟲除蚤產品";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountCategory {
    Prescription,
    Parasite,
    Default,
}

impl DiscountCategory {
    /// Percentage configured for this category.
    #[must_use]
    pub fn percentage(self, settings: &DiscountSettings) -> f64 {
        match self {
            DiscountCategory::Prescription => settings.prescription_percentage,
            DiscountCategory::Parasite => settings.parasite_percentage,
            DiscountCategory::Default => settings.default_percentage,
        }
    }
}

impl std::fmt::Display for DiscountCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiscountCategory::Prescription => write!(f, "prescription"),
            DiscountCategory::Parasite => write!(f, "parasite"),
            DiscountCategory::Default => write!(f, "default"),
        }
    }
}

/// Discount pricing for one variant. Only produced for a non-zero percentage.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedDiscount {
    pub percentage: f64,
    pub discounted_price: String,
}

fn has_marker(tags: &[String], marker: &str) -> bool {
    tags.iter().any(|tag| tag.contains(marker))
}

/// Picks the first enabled category that matches `tags`.
#[must_use]
pub fn classify_category(
    tags: &[String],
    settings: &DiscountSettings,
) -> Option<DiscountCategory> {
    if settings.prescription_enabled && has_marker(tags, PRESCRIPTION_MARKER) {
        Some(DiscountCategory::Prescription)
    } else if settings.parasite_enabled && has_marker(tags, PARASITE_MARKER) {
        Some(DiscountCategory::Parasite)
    } else if settings.default_enabled {
        Some(DiscountCategory::Default)
    } else {
        None
    }
}

/// Selected discount percentage for a product with `tags`, or `None` when no
/// category applies.
///
/// A matched category configured at `0` still returns `Some(0.0)`;
/// [`apply_discount`] is what treats zero as "no discount".
#[must_use]
pub fn classify(tags: &[String], settings: &DiscountSettings) -> Option<f64> {
    classify_category(tags, settings).map(|category| category.percentage(settings))
}

/// Discounted display price for a raw decimal `price`.
///
/// Returns `None` when `percentage` is zero or `price` is not a number.
/// Otherwise computes `price * (1 - percentage / 100)` and formats it with
/// [`format_amount`].
#[must_use]
pub fn apply_discount(price: &str, percentage: f64) -> Option<String> {
    if percentage == 0.0 || !percentage.is_finite() {
        return None;
    }
    let original = parse_amount(price)?;
    Some(format_amount(original * (1.0 - percentage / 100.0)))
}

/// Classifies `tags` and prices `price` in one step.
///
/// `None` means the variant shows no discount at all: no category applied,
/// the percentage was zero, or the price could not be parsed.
#[must_use]
pub fn discount_variant(
    tags: &[String],
    price: &str,
    settings: &DiscountSettings,
) -> Option<AppliedDiscount> {
    let percentage = classify(tags, settings)?;
    let discounted_price = apply_discount(price, percentage)?;
    Some(AppliedDiscount {
        percentage,
        discounted_price,
    })
}
