//! Storefront API client for the discount policy and product catalog.

mod catalog;
mod settings;

use serde::de::DeserializeOwned;
use vetstore_core::{
    StoreConfig, DEFAULT_DISCOUNT_METAOBJECT_ID, DEFAULT_DISCOUNT_METAOBJECT_TYPE,
};

use crate::error::StorefrontError;
use crate::transport::{GraphqlRequest, GraphqlTransport, HttpTransport};
use crate::types::GraphqlEnvelope;

/// Client for one store's Storefront API.
///
/// The public fetch operations never fail: any transport error, unexpected
/// response shape or GraphQL `errors` array is logged and replaced with a
/// safe fallback (the fixed discount policy, or an empty list). The `try_*`
/// variants surface the underlying [`StorefrontError`] instead.
///
/// Every call fetches fresh data; nothing is cached between calls.
pub struct StorefrontClient<T = HttpTransport> {
    transport: T,
    discount_metaobject_id: String,
    discount_metaobject_type: String,
}

impl StorefrontClient<HttpTransport> {
    /// Creates a client that talks to the store described by `config` over HTTPS.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::InvalidEndpoint`] if the store domain does
    /// not form a valid URL, or [`StorefrontError::Http`] if the HTTP client
    /// cannot be constructed.
    pub fn from_config(config: &StoreConfig) -> Result<Self, StorefrontError> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::with_transport(transport).with_discount_source(
            &config.discount_metaobject_id,
            &config.discount_metaobject_type,
        ))
    }
}

impl<T: GraphqlTransport> StorefrontClient<T> {
    /// Creates a client over an arbitrary transport, using the default
    /// discount-policy reference and type.
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            discount_metaobject_id: DEFAULT_DISCOUNT_METAOBJECT_ID.to_owned(),
            discount_metaobject_type: DEFAULT_DISCOUNT_METAOBJECT_TYPE.to_owned(),
        }
    }

    /// Overrides where the discount policy is looked up.
    #[must_use]
    pub fn with_discount_source(mut self, metaobject_id: &str, metaobject_type: &str) -> Self {
        metaobject_id.clone_into(&mut self.discount_metaobject_id);
        metaobject_type.clone_into(&mut self.discount_metaobject_type);
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends one query and decodes its `data` member.
    ///
    /// Returns `Ok(None)` when the response carries no `data`.
    ///
    /// # Errors
    ///
    /// - Any error from the transport.
    /// - [`StorefrontError::GraphQl`] if the body has an `errors` member.
    /// - [`StorefrontError::Deserialize`] if `data` does not match `D`.
    async fn run<D: DeserializeOwned>(
        &self,
        request: &GraphqlRequest<'_>,
        context: &str,
    ) -> Result<Option<D>, StorefrontError> {
        let body = self.transport.execute(request).await?;
        check_graphql_errors(&body)?;

        let envelope: GraphqlEnvelope<D> =
            serde_json::from_value(body).map_err(|e| StorefrontError::Deserialize {
                context: context.to_owned(),
                source: e,
            })?;

        Ok(envelope.data)
    }
}

/// Returns an error if the body has a non-null `errors` member, carrying the
/// first error's message.
fn check_graphql_errors(body: &serde_json::Value) -> Result<(), StorefrontError> {
    match body.get("errors") {
        None | Some(serde_json::Value::Null) => Ok(()),
        Some(errors) => {
            let msg = errors
                .get(0)
                .and_then(|e| e.get("message"))
                .and_then(serde_json::Value::as_str)
                .unwrap_or("unknown error")
                .to_string();
            Err(StorefrontError::GraphQl(msg))
        }
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
