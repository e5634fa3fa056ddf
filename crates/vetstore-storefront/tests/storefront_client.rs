//! Integration tests for `StorefrontClient` over `HttpTransport`.
//!
//! Uses `wiremock` to stand up a local GraphQL endpoint for each test so no
//! real network traffic is made. Covers the request contract (path, token
//! header, variables) and every fallback path of the public operations.

use serde_json::json;
use wiremock::matchers::{body_partial_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vetstore_core::{DiscountSettings, StoreConfig};
use vetstore_storefront::StorefrontClient;

const GRAPHQL_PATH: &str = "/api/2024-01/graphql.json";

fn test_client(server: &MockServer) -> StorefrontClient {
    let mut config = StoreConfig::new(&server.uri(), "test-token");
    config.request_timeout_secs = 5;
    StorefrontClient::from_config(&config).expect("failed to build test StorefrontClient")
}

fn settings_response() -> serde_json::Value {
    json!({
        "data": {
            "metaobject": {
                "id": "gid://shopify/Metaobject/81585340616",
                "handle": "event-discount-settings",
                "type": "event_discount_settings",
                "fields": [
                    { "key": "prescription_enabled", "value": "true" },
                    { "key": "prescription_percentage", "value": "15" },
                    { "key": "parasite_enabled", "value": "false" },
                    { "key": "parasite_percentage", "value": "10" },
                    { "key": "default_enabled", "value": "true" },
                    { "key": "default_percentage", "value": "5" }
                ]
            },
            "metaobjects": { "edges": [] }
        }
    })
}

fn products_response() -> serde_json::Value {
    json!({
        "data": {
            "products": {
                "edges": [
                    {
                        "node": {
                            "id": "gid://shopify/Product/1",
                            "title": "Urinary S/O Dry Cat Food",
                            "handle": "urinary-so-dry-cat-food",
                            "tags": ["貓用處方糧", "cat"],
                            "vendor": "Royal Canin",
                            "images": { "edges": [{ "node": {
                                "url": "https://cdn.shopify.com/urinary.jpg",
                                "altText": null
                            }}]},
                            "variants": { "edges": [{ "node": {
                                "id": "gid://shopify/ProductVariant/11",
                                "title": "1.5kg",
                                "sku": "RC-USO-15",
                                "price": { "amount": "1280.0", "currencyCode": "TWD" },
                                "compareAtPrice": { "amount": "1400.0", "currencyCode": "TWD" },
                                "availableForSale": true
                            }}]}
                        }
                    },
                    {
                        "node": {
                            "id": "gid://shopify/Product/2",
                            "title": "Spot-on Flea Treatment",
                            "handle": "spot-on-flea-treatment",
                            "tags": ["驅蟲除蚤產品"],
                            "vendor": "Frontline",
                            "images": { "edges": [] },
                            "variants": { "edges": [{ "node": {
                                "id": "gid://shopify/ProductVariant/21",
                                "title": "Default Title",
                                "sku": null,
                                "price": { "amount": "600.0", "currencyCode": "TWD" },
                                "compareAtPrice": null,
                                "availableForSale": false
                            }}]}
                        }
                    }
                ]
            }
        }
    })
}

async fn mount_settings(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_string_contains("DiscountSettings"))
        .respond_with(response)
        .mount(server)
        .await;
}

// ---------------------------------------------------------------------------
// Request contract
// ---------------------------------------------------------------------------

#[tokio::test]
async fn requests_carry_access_token_header_and_variables() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(header("X-Shopify-Storefront-Access-Token", "test-token"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "variables": {
                "id": "gid://shopify/Metaobject/81585340616",
                "type": "event_discount_settings"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(settings_response()))
        .expect(1)
        .mount(&server)
        .await;

    let settings = test_client(&server).discount_settings().await;

    assert!(settings.prescription_enabled);
    assert!(!settings.parasite_enabled);
    assert!((settings.prescription_percentage - 15.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn catalog_query_filters_by_collection_type() {
    let server = MockServer::start().await;
    mount_settings(&server, ResponseTemplate::new(200).set_body_json(settings_response())).await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_string_contains("GetProducts"))
        .and(body_partial_json(json!({
            "variables": { "first": 250, "query": "collection_type:prescription-diets" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(products_response()))
        .expect(1)
        .mount(&server)
        .await;

    let products = test_client(&server)
        .products_by_collection(Some("prescription-diets"))
        .await;

    assert_eq!(products.len(), 2);
    assert!(products.iter().all(|p| p.collection == "prescription-diets"));
}

// ---------------------------------------------------------------------------
// Discount pricing end to end
// ---------------------------------------------------------------------------

#[tokio::test]
async fn catalog_applies_policy_from_metaobject() {
    let server = MockServer::start().await;
    mount_settings(&server, ResponseTemplate::new(200).set_body_json(settings_response())).await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_string_contains("GetProducts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(products_response()))
        .mount(&server)
        .await;

    let products = test_client(&server).products_by_collection(None).await;
    assert_eq!(products.len(), 2);

    // Prescription tag matched as a substring: 1280 * 0.85.
    let rx = &products[0].variants[0];
    assert_eq!(rx.price, "1,280.00");
    assert_eq!(rx.compare_at_price.as_deref(), Some("1,400.00"));
    assert_eq!(rx.discounted_price.as_deref(), Some("1,088.00"));
    assert_eq!(rx.discount_percentage, Some(15.0));
    assert_eq!(products[0].images.len(), 1);
    assert_eq!(products[0].collection, "");

    // Parasite disabled in the policy, so the default 5% applies: 600 * 0.95.
    let flea = &products[1].variants[0];
    assert_eq!(flea.discounted_price.as_deref(), Some("570.00"));
    assert_eq!(flea.discount_percentage, Some(5.0));
    assert_eq!(flea.sku, "");
    assert!(!flea.available_for_sale);
}

#[tokio::test]
async fn catalog_uses_fallback_policy_when_settings_request_fails() {
    let server = MockServer::start().await;
    mount_settings(&server, ResponseTemplate::new(500)).await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_string_contains("GetProducts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(products_response()))
        .mount(&server)
        .await;

    let products = test_client(&server).products_by_collection(None).await;

    // Fallback: prescription 10%, parasite 10%.
    assert_eq!(
        products[0].variants[0].discounted_price.as_deref(),
        Some("1,152.00")
    );
    assert_eq!(
        products[1].variants[0].discounted_price.as_deref(),
        Some("540.00")
    );
}

// ---------------------------------------------------------------------------
// Fallbacks
// ---------------------------------------------------------------------------

#[tokio::test]
async fn discount_settings_fallback_on_server_error() {
    let server = MockServer::start().await;
    mount_settings(&server, ResponseTemplate::new(503)).await;

    let settings = test_client(&server).discount_settings().await;
    assert_eq!(settings, DiscountSettings::fallback());
}

#[tokio::test]
async fn discount_settings_fallback_on_graphql_errors() {
    let server = MockServer::start().await;
    mount_settings(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{ "message": "Access denied for metaobject field." }]
        })),
    )
    .await;

    let client = test_client(&server);
    let result = client.try_discount_settings().await;
    assert!(result.is_err(), "expected Err, got: {result:?}");
    assert_eq!(client.discount_settings().await, DiscountSettings::fallback());
}

#[tokio::test]
async fn discount_settings_fallback_on_non_json_body() {
    let server = MockServer::start().await;
    mount_settings(
        &server,
        ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"),
    )
    .await;

    let settings = test_client(&server).discount_settings().await;
    assert_eq!(settings, DiscountSettings::fallback());
}

#[tokio::test]
async fn discount_settings_fallback_on_unreachable_host() {
    let mut config = StoreConfig::new("http://127.0.0.1:1", "test-token");
    config.request_timeout_secs = 5;
    let client = StorefrontClient::from_config(&config).expect("client should build");

    assert_eq!(client.discount_settings().await, DiscountSettings::fallback());
    assert!(client.products_by_collection(None).await.is_empty());
    assert!(client.collections().await.is_empty());
}

#[tokio::test]
async fn catalog_missing_products_shape_returns_empty() {
    let server = MockServer::start().await;
    mount_settings(&server, ResponseTemplate::new(200).set_body_json(settings_response())).await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_string_contains("GetProducts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "shop": {} } })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client.try_products_by_collection(None).await;
    assert!(result.is_ok(), "missing shape is not an error: {result:?}");
    assert!(result.unwrap().is_empty());
}

#[tokio::test]
async fn catalog_returns_empty_on_server_error() {
    let server = MockServer::start().await;
    mount_settings(&server, ResponseTemplate::new(200).set_body_json(settings_response())).await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_string_contains("GetProducts"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    assert!(test_client(&server)
        .products_by_collection(Some("cat-food"))
        .await
        .is_empty());
}

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

#[tokio::test]
async fn collections_lists_handles() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_string_contains("GetCollections"))
        .and(body_partial_json(json!({ "variables": { "first": 250 } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "collections": { "edges": [
                { "node": { "id": "gid://shopify/Collection/1", "handle": "prescription-diets", "title": "處方糧" } }
            ]}}
        })))
        .mount(&server)
        .await;

    let collections = test_client(&server).collections().await;
    assert_eq!(collections.len(), 1);
    assert_eq!(collections[0].handle, "prescription-diets");
    assert_eq!(collections[0].title, "處方糧");
}
