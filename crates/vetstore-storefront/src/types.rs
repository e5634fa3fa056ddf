//! Storefront API response shapes for the queries in [`crate::queries`].
//!
//! Every `data` sub-tree is modeled as `Option` so that a missing branch
//! reads as "nothing found" rather than a deserialization failure. GraphQL
//! lists come wrapped in `edges { node }` connections.

use serde::Deserialize;

/// Top-level GraphQL response. `errors` is checked separately, before this
/// is deserialized.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "D: Deserialize<'de>"))]
pub struct GraphqlEnvelope<D> {
    #[serde(default)]
    pub data: Option<D>,
}

/// An `edges { node }` list.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Connection<T> {
    #[serde(default)]
    pub edges: Vec<Edge<T>>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { edges: Vec::new() }
    }
}

impl<T> Connection<T> {
    pub fn into_nodes(self) -> impl Iterator<Item = T> {
        self.edges.into_iter().map(|edge| edge.node)
    }
}

#[derive(Debug, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

// ---------------------------------------------------------------------------
// Discount settings
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct DiscountSettingsData {
    /// Lookup by stable reference. `null` when the ID no longer resolves.
    #[serde(default)]
    pub metaobject: Option<Metaobject>,
    /// Lookup by type, newest first.
    #[serde(default)]
    pub metaobjects: Option<Connection<Metaobject>>,
}

impl DiscountSettingsData {
    /// The referenced metaobject if present, otherwise the first one of the
    /// policy type.
    #[must_use]
    pub fn into_policy_document(self) -> Option<Metaobject> {
        self.metaobject.or_else(|| {
            self.metaobjects
                .and_then(|connection| connection.into_nodes().next())
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct Metaobject {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub handle: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// `None` when the API omits the field list entirely.
    #[serde(default)]
    pub fields: Option<Vec<MetaobjectField>>,
}

#[derive(Debug, Deserialize)]
pub struct MetaobjectField {
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
}

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct CollectionsData {
    #[serde(default)]
    pub collections: Option<Connection<CollectionNode>>,
}

#[derive(Debug, Deserialize)]
pub struct CollectionNode {
    pub id: String,
    pub handle: String,
    pub title: String,
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ProductsData {
    #[serde(default)]
    pub products: Option<Connection<ProductNode>>,
}

#[derive(Debug, Deserialize)]
pub struct ProductNode {
    pub id: String,
    pub title: String,
    pub handle: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub images: Connection<ImageNode>,
    #[serde(default)]
    pub variants: Connection<VariantNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageNode {
    pub url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantNode {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub sku: Option<String>,
    pub price: MoneyV2,
    /// `null` when the variant is not on sale.
    #[serde(default)]
    pub compare_at_price: Option<MoneyV2>,
    #[serde(default)]
    pub available_for_sale: bool,
}

/// Storefront `MoneyV2`: a decimal string plus ISO 4217 currency code.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyV2 {
    pub amount: String,
    #[serde(default)]
    pub currency_code: Option<String>,
}
