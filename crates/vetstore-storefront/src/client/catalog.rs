//! Catalog and collection fetches for `StorefrontClient`.

use serde_json::json;
use vetstore_core::{Collection, Product};

use crate::error::StorefrontError;
use crate::normalize::{normalize_collection, normalize_product};
use crate::queries::{
    collection_filter, COLLECTIONS_QUERY, MAX_COLLECTIONS, MAX_PRODUCTS, PRODUCTS_QUERY,
};
use crate::transport::{GraphqlRequest, GraphqlTransport};
use crate::types::{CollectionsData, ProductsData};

use super::StorefrontClient;

impl<T: GraphqlTransport> StorefrontClient<T> {
    /// Fetches up to 250 products, optionally restricted to one collection,
    /// with discount pricing applied. Returns an empty list on any failure.
    pub async fn products_by_collection(&self, collection_handle: Option<&str>) -> Vec<Product> {
        match self.try_products_by_collection(collection_handle).await {
            Ok(products) => products,
            Err(e) => {
                tracing::error!(
                    collection = collection_handle.unwrap_or_default(),
                    error = %e,
                    "failed to fetch products"
                );
                Vec::new()
            }
        }
    }

    /// Resolves the discount policy, then fetches and normalizes the catalog.
    ///
    /// A response without a product list yields `Ok(vec![])`.
    ///
    /// # Errors
    ///
    /// Propagates transport, GraphQL and deserialization errors from the
    /// catalog query. Policy resolution itself never fails.
    pub async fn try_products_by_collection(
        &self,
        collection_handle: Option<&str>,
    ) -> Result<Vec<Product>, StorefrontError> {
        let settings = self.discount_settings().await;

        let collection = collection_handle.filter(|handle| !handle.is_empty());
        let request = GraphqlRequest {
            query: PRODUCTS_QUERY,
            variables: Some(json!({
                "first": MAX_PRODUCTS,
                "query": collection_filter(collection),
            })),
        };

        let data: Option<ProductsData> = self.run(&request, "products").await?;
        let Some(connection) = data.and_then(|d| d.products) else {
            tracing::warn!(
                collection = collection.unwrap_or_default(),
                "no product list in response"
            );
            return Ok(Vec::new());
        };

        let collection = collection.unwrap_or_default();
        let products = connection
            .into_nodes()
            .map(|node| normalize_product(node, collection, &settings))
            .collect::<Vec<_>>();

        tracing::debug!(collection, count = products.len(), "fetched products");
        Ok(products)
    }

    /// Lists up to 250 collections. Returns an empty list on any failure.
    pub async fn collections(&self) -> Vec<Collection> {
        match self.try_collections().await {
            Ok(collections) => collections,
            Err(e) => {
                tracing::error!(error = %e, "failed to fetch collections");
                Vec::new()
            }
        }
    }

    /// # Errors
    ///
    /// Propagates transport, GraphQL and deserialization errors.
    pub async fn try_collections(&self) -> Result<Vec<Collection>, StorefrontError> {
        let request = GraphqlRequest {
            query: COLLECTIONS_QUERY,
            variables: Some(json!({ "first": MAX_COLLECTIONS })),
        };

        let data: Option<CollectionsData> = self.run(&request, "collections").await?;
        let collections = data
            .and_then(|d| d.collections)
            .map(|connection| connection.into_nodes().map(normalize_collection).collect())
            .unwrap_or_default();

        Ok(collections)
    }
}
