//! Discount-policy resolution for `StorefrontClient`.

use serde_json::json;
use vetstore_core::DiscountSettings;

use crate::error::StorefrontError;
use crate::queries::DISCOUNT_SETTINGS_QUERY;
use crate::transport::{GraphqlRequest, GraphqlTransport};
use crate::types::DiscountSettingsData;

use super::StorefrontClient;

impl<T: GraphqlTransport> StorefrontClient<T> {
    /// Resolves the discount policy, falling back to
    /// [`DiscountSettings::fallback`] on any failure or when no policy
    /// metaobject exists.
    pub async fn discount_settings(&self) -> DiscountSettings {
        match self.try_discount_settings().await {
            Ok(Some(settings)) => settings,
            Ok(None) => {
                tracing::warn!(
                    metaobject_id = %self.discount_metaobject_id,
                    metaobject_type = %self.discount_metaobject_type,
                    "discount settings metaobject not found, using fallback policy; \
                     check the token has unauthenticated_read_metaobjects scope, \
                     the metaobject type name matches, and the metaobject is published"
                );
                DiscountSettings::fallback()
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to fetch discount settings, using fallback policy");
                DiscountSettings::fallback()
            }
        }
    }

    /// Fetches and parses the discount-policy metaobject.
    ///
    /// Both lookups go out in a single request: the metaobject by its stable
    /// ID, and the first metaobject of the policy type. The direct reference
    /// wins when both resolve. Returns `Ok(None)` when neither resolves or
    /// the document has no field list.
    ///
    /// # Errors
    ///
    /// Propagates transport, GraphQL and deserialization errors.
    pub async fn try_discount_settings(
        &self,
    ) -> Result<Option<DiscountSettings>, StorefrontError> {
        let request = GraphqlRequest {
            query: DISCOUNT_SETTINGS_QUERY,
            variables: Some(json!({
                "id": self.discount_metaobject_id,
                "type": self.discount_metaobject_type,
            })),
        };

        let data: Option<DiscountSettingsData> = self.run(&request, "discount settings").await?;

        let Some(document) = data.and_then(DiscountSettingsData::into_policy_document) else {
            return Ok(None);
        };
        let Some(fields) = document.fields else {
            return Ok(None);
        };

        tracing::debug!(
            metaobject_id = document.id.as_deref().unwrap_or_default(),
            metaobject_handle = document.handle.as_deref().unwrap_or_default(),
            fields = ?fields,
            "raw discount settings"
        );

        let settings = DiscountSettings::from_fields(
            fields
                .iter()
                .map(|field| (field.key.as_str(), field.value.as_deref())),
        );

        tracing::debug!(?settings, "parsed discount settings");
        Ok(Some(settings))
    }
}
