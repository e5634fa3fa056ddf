//! GraphQL documents sent to the Storefront API.

/// Upper bound on products returned by one catalog query.
pub const MAX_PRODUCTS: u32 = 250;

/// Upper bound on collections returned by one collection query.
pub const MAX_COLLECTIONS: u32 = 250;

/// Fetches the discount-policy metaobject twice in one round trip: once by
/// its stable ID and once as the most recent metaobject of the policy type.
pub const DISCOUNT_SETTINGS_QUERY: &str = r"
query DiscountSettings($id: ID!, $type: String!) {
  metaobject(id: $id) {
    id
    handle
    type
    fields {
      key
      value
    }
  }
  metaobjects(type: $type, first: 1) {
    edges {
      node {
        id
        handle
        type
        fields {
          key
          value
        }
      }
    }
  }
}
";

pub const COLLECTIONS_QUERY: &str = r"
query GetCollections($first: Int!) {
  collections(first: $first) {
    edges {
      node {
        id
        handle
        title
      }
    }
  }
}
";

/// Products with their first image and up to ten variants. `$query` is a
/// storefront search string; empty means unfiltered.
pub const PRODUCTS_QUERY: &str = r"
query GetProducts($first: Int!, $query: String) {
  products(first: $first, query: $query) {
    edges {
      node {
        id
        title
        handle
        tags
        vendor
        images(first: 1) {
          edges {
            node {
              url
              altText
            }
          }
        }
        variants(first: 10) {
          edges {
            node {
              id
              title
              sku
              price {
                amount
                currencyCode
              }
              compareAtPrice {
                amount
                currencyCode
              }
              availableForSale
            }
          }
        }
      }
    }
  }
}
";

/// Storefront search string selecting one collection's products.
#[must_use]
pub fn collection_filter(collection_handle: Option<&str>) -> String {
    collection_handle
        .filter(|handle| !handle.is_empty())
        .map_or_else(String::new, |handle| format!("collection_type:{handle}"))
}
