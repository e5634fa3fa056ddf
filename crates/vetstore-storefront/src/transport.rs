//! Transport seam between the Storefront client and the network.
//!
//! [`StorefrontClient`](crate::StorefrontClient) only needs "send this query,
//! give me the JSON body back". Production code uses [`HttpTransport`]; tests
//! substitute an implementation that returns canned bodies.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Serialize;
use vetstore_core::StoreConfig;

use crate::error::StorefrontError;

/// Header carrying the Storefront API access token.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Storefront-Access-Token";

/// Body of a single GraphQL POST.
#[derive(Debug, Serialize)]
pub struct GraphqlRequest<'a> {
    pub query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<serde_json::Value>,
}

/// Executes one GraphQL request and returns the decoded JSON body.
///
/// Implementations report transport failures, non-2xx statuses and bodies
/// that are not JSON as errors. Interpreting the body (including the
/// `errors` array) is left to the caller.
pub trait GraphqlTransport {
    async fn execute(
        &self,
        request: &GraphqlRequest<'_>,
    ) -> Result<serde_json::Value, StorefrontError>;
}

/// [`GraphqlTransport`] over HTTPS with token header authentication.
pub struct HttpTransport {
    client: Client,
    endpoint: Url,
    access_token: String,
}

impl HttpTransport {
    /// Creates a transport for the store described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::InvalidEndpoint`] if the store domain does
    /// not form a valid URL, or [`StorefrontError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(config: &StoreConfig) -> Result<Self, StorefrontError> {
        let endpoint = graphql_endpoint(&config.store_domain, &config.api_version)?;
        Self::with_endpoint(
            endpoint,
            &config.access_token,
            config.request_timeout_secs,
        )
    }

    /// Creates a transport that posts to an explicit endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_endpoint(
        endpoint: Url,
        access_token: &str,
        timeout_secs: u64,
    ) -> Result<Self, StorefrontError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            endpoint,
            access_token: access_token.to_owned(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl GraphqlTransport for HttpTransport {
    async fn execute(
        &self,
        request: &GraphqlRequest<'_>,
    ) -> Result<serde_json::Value, StorefrontError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StorefrontError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.endpoint.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| StorefrontError::Deserialize {
            context: format!("response body from {}", self.endpoint),
            source: e,
        })
    }
}

/// Builds `https://{domain}/api/{version}/graphql.json`.
///
/// A domain that already starts with `http://` or `https://` keeps its
/// scheme; surrounding whitespace and trailing slashes are dropped.
///
/// # Errors
///
/// Returns [`StorefrontError::InvalidEndpoint`] if the result is not a valid URL.
pub fn graphql_endpoint(store_domain: &str, api_version: &str) -> Result<Url, StorefrontError> {
    let domain = store_domain.trim().trim_end_matches('/');
    let origin = if domain.starts_with("http://") || domain.starts_with("https://") {
        domain.to_owned()
    } else {
        format!("https://{domain}")
    };

    let url = Url::parse(&format!("{origin}/api/{api_version}/graphql.json")).map_err(|e| {
        StorefrontError::InvalidEndpoint {
            domain: store_domain.to_owned(),
            reason: e.to_string(),
        }
    })?;

    if url.host_str().is_none_or(str::is_empty) {
        return Err(StorefrontError::InvalidEndpoint {
            domain: store_domain.to_owned(),
            reason: "missing host".to_owned(),
        });
    }

    Ok(url)
}
