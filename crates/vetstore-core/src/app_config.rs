/// Storefront API version segment used in the endpoint path.
pub const DEFAULT_API_VERSION: &str = "2024-01";

/// Stable reference to the published discount-policy metaobject.
pub const DEFAULT_DISCOUNT_METAOBJECT_ID: &str = "gid://shopify/Metaobject/81585340616";

/// Metaobject type name used for the fallback lookup when the stable
/// reference no longer resolves.
pub const DEFAULT_DISCOUNT_METAOBJECT_TYPE: &str = "event_discount_settings";

/// Connection parameters for one store's Storefront API.
#[derive(Clone)]
pub struct StoreConfig {
    /// Store domain, e.g. `"my-vet-shop.myshopify.com"`. May carry an
    /// explicit `http(s)://` scheme.
    pub store_domain: String,
    pub access_token: String,
    pub api_version: String,
    pub discount_metaobject_id: String,
    pub discount_metaobject_type: String,
    pub request_timeout_secs: u64,
    pub log_level: String,
}

impl StoreConfig {
    /// Builds a config with the two required connection parameters and
    /// defaults for everything else.
    #[must_use]
    pub fn new(store_domain: &str, access_token: &str) -> Self {
        Self {
            store_domain: store_domain.to_owned(),
            access_token: access_token.to_owned(),
            api_version: DEFAULT_API_VERSION.to_owned(),
            discount_metaobject_id: DEFAULT_DISCOUNT_METAOBJECT_ID.to_owned(),
            discount_metaobject_type: DEFAULT_DISCOUNT_METAOBJECT_TYPE.to_owned(),
            request_timeout_secs: 30,
            log_level: "info".to_owned(),
        }
    }
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("store_domain", &self.store_domain)
            .field("access_token", &"[redacted]")
            .field("api_version", &self.api_version)
            .field("discount_metaobject_id", &self.discount_metaobject_id)
            .field("discount_metaobject_type", &self.discount_metaobject_type)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("log_level", &self.log_level)
            .finish()
    }
}
