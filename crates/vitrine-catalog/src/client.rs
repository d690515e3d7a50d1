//! GraphQL catalog client
//!
//! One fixed query, templated only with the collection path and the
//! configured image width. The bearer credential comes from page markup and
//! is passed per call.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::redirect::Policy;
use serde::Deserialize;
use url::Url;

use crate::error::CatalogError;
use crate::product::Product;
use crate::Result;

/// Endpoint path, relative to the store origin.
const GRAPHQL_PATH: &str = "/graphql";

/// Where tab panels get their products from. Object safe so controllers can
/// be driven by a stub in tests.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetch the products of the category at `path`, in storefront order.
    async fn fetch_category(&self, path: &str, token: &str) -> Result<Vec<Product>>;
}

pub struct CatalogClient {
    http: reqwest::Client,
    endpoint: Url,
    image_width: u32,
}

impl CatalogClient {
    pub fn new(store_origin: &Url, timeout: Duration, image_width: u32) -> Result<Self> {
        let http = reqwest::Client::builder()
            .redirect(Policy::limited(5))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            endpoint: store_origin.join(GRAPHQL_PATH)?,
            image_width,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ProductSource for CatalogClient {
    async fn fetch_category(&self, path: &str, token: &str) -> Result<Vec<Product>> {
        let query = category_query(path, self.image_width);

        let response = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(token)
            .json(&serde_json::json!({ "query": query }))
            .send()
            .await?
            .error_for_status()?;

        let envelope: Envelope = response.json().await?;
        let products = extract_products(envelope, path)?;

        tracing::info!(path, count = products.len(), "fetched category products");

        Ok(products)
    }
}

fn category_query(path: &str, image_width: u32) -> String {
    let path = escape_string_literal(path);
    format!(
        r#"query CategoryProducts {{
  site {{
    route(path: "{path}") {{
      node {{
        ... on Category {{
          name
          products {{
            edges {{
              node {{
                entityId
                name
                path
                addToCartUrl
                defaultImage {{ url(width: {image_width}) }}
                prices {{ price {{ value currencyCode }} }}
              }}
            }}
          }}
        }}
      }}
    }}
  }}
}}"#
    )
}

/// Escape a value for inclusion in a double-quoted GraphQL string literal.
fn escape_string_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

// === Response envelope ===

#[derive(Debug, Deserialize)]
struct Envelope {
    data: Option<SitePayload>,
}

#[derive(Debug, Deserialize)]
struct SitePayload {
    site: Site,
}

#[derive(Debug, Deserialize)]
struct Site {
    route: Route,
}

#[derive(Debug, Deserialize)]
struct Route {
    node: Option<Category>,
}

#[derive(Debug, Deserialize)]
struct Category {
    #[serde(default)]
    name: String,
    products: ProductConnection,
}

#[derive(Debug, Deserialize)]
struct ProductConnection {
    #[serde(default)]
    edges: Vec<ProductEdge>,
}

#[derive(Debug, Deserialize)]
struct ProductEdge {
    node: Product,
}

fn extract_products(envelope: Envelope, path: &str) -> Result<Vec<Product>> {
    let payload = envelope.data.ok_or(CatalogError::MissingData("data"))?;

    let category = payload
        .site
        .route
        .node
        .ok_or_else(|| CatalogError::CategoryNotFound(path.to_string()))?;

    tracing::debug!(path, category = %category.name, "resolved category route");

    Ok(category
        .products
        .edges
        .into_iter()
        .map(|edge| edge.node)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_embeds_path_and_image_width() {
        let query = category_query("/sale-shoes/", 300);
        assert!(query.contains("route(path: \"/sale-shoes/\")"));
        assert!(query.contains("url(width: 300)"));
        assert!(query.contains("entityId"));
        assert!(query.contains("currencyCode"));
    }

    #[test]
    fn test_query_escapes_quotes_in_path() {
        let query = category_query("/a\"b/", 300);
        assert!(query.contains("route(path: \"/a\\\"b/\")"));
    }

    #[test]
    fn test_extracts_edges_in_response_order() {
        let json = r#"{
            "data": { "site": { "route": { "node": {
                "name": "Sale",
                "products": { "edges": [
                    { "node": { "entityId": 1, "name": "A", "path": "/a/" } },
                    { "node": { "entityId": 2, "name": "B", "path": "/b/" } }
                ] }
            } } } }
        }"#;

        let envelope: Envelope = serde_json::from_str(json).unwrap();
        let products = extract_products(envelope, "/sale/").unwrap();
        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn test_missing_edges_is_empty() {
        let json = r#"{
            "data": { "site": { "route": { "node": {
                "name": "Empty", "products": {}
            } } } }
        }"#;

        let envelope: Envelope = serde_json::from_str(json).unwrap();
        assert!(extract_products(envelope, "/empty/").unwrap().is_empty());
    }

    #[test]
    fn test_null_route_node_is_category_not_found() {
        let json = r#"{ "data": { "site": { "route": { "node": null } } } }"#;
        let envelope: Envelope = serde_json::from_str(json).unwrap();

        let result = extract_products(envelope, "/nowhere/");
        assert!(matches!(
            result,
            Err(CatalogError::CategoryNotFound(ref path)) if path == "/nowhere/"
        ));
    }

    #[test]
    fn test_missing_data_is_an_error() {
        let envelope: Envelope = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            extract_products(envelope, "/x/"),
            Err(CatalogError::MissingData("data"))
        ));
    }

    #[test]
    fn test_client_endpoint_is_fixed() {
        let origin = Url::parse("https://shop.example.com").unwrap();
        let client = CatalogClient::new(&origin, Duration::from_secs(12), 300).unwrap();
        assert_eq!(client.endpoint().as_str(), "https://shop.example.com/graphql");
    }
}
