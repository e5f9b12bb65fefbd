use super::{CatalogError, CatalogSource};
use crate::model::Product;
use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{debug, instrument};

/// Reads the catalog with a single `GET` on a products listing endpoint.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    http: reqwest::Client,
    url: String,
}

#[derive(Deserialize)]
struct Listing {
    #[serde(default, deserialize_with = "lenient_products")]
    products: Vec<Product>,
}

// An entry that is not an object still takes a slot, as an empty product.
fn lenient_products<'de, D>(deserializer: D) -> Result<Vec<Product>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(entries) => entries
            .into_iter()
            .map(|entry| serde_json::from_value(entry).unwrap_or_default())
            .collect(),
        _ => Vec::new(),
    })
}

impl HttpCatalog {
    pub fn new(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self.http.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status));
        }

        let listing: Listing = response.json().await?;
        debug!(count = listing.products.len(), "Catalog fetched");
        Ok(listing.products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn catalog_serving(template: ResponseTemplate) -> (MockServer, HttpCatalog) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products"))
            .respond_with(template)
            .expect(1)
            .mount(&server)
            .await;
        let catalog = HttpCatalog::new(reqwest::Client::new(), format!("{}/products", server.uri()));
        (server, catalog)
    }

    #[tokio::test]
    async fn test_fetch_reads_products_field() {
        let (_server, catalog) = catalog_serving(ResponseTemplate::new(200).set_body_json(json!({
            "products": [
                {"id": 1, "title": "Essence Mascara", "price": 9.99, "images": ["https://cdn.example/1.png"]},
                {"id": 2, "title": "Eyeshadow Palette", "price": 19.99, "rating": 4.2}
            ],
            "total": 2,
            "skip": 0,
            "limit": 30
        })))
        .await;

        let products = catalog.fetch_products().await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, ProductId::from(1u64));
        assert_eq!(products[0].cover_image(), Some("https://cdn.example/1.png"));
        assert_eq!(products[1].description, "");
        assert!(products[1].images.is_empty());
    }

    #[tokio::test]
    async fn test_wrong_shaped_fields_keep_the_listing() {
        let (_server, catalog) = catalog_serving(ResponseTemplate::new(200).set_body_json(json!({
            "products": [
                {"id": 1, "title": "A", "price": 5, "images": ["https://cdn.example/a.png"]},
                {"id": 2, "title": "B", "price": "10", "images": null},
                {"id": null, "title": null, "price": null},
                "not a product"
            ]
        })))
        .await;

        let products = catalog.fetch_products().await.unwrap();
        assert_eq!(products.len(), 4);
        assert_eq!(products[0].title, "A");
        assert_eq!(products[1].id, ProductId::from(2u64));
        assert_eq!(products[1].price, 10.0);
        assert!(products[1].images.is_empty());
        assert_eq!(products[2].id, ProductId::default());
        assert_eq!(products[2].title, "");
        assert_eq!(products[3], Product::default());
    }

    #[tokio::test]
    async fn test_null_products_is_empty_catalog() {
        let (_server, catalog) =
            catalog_serving(ResponseTemplate::new(200).set_body_json(json!({"products": null}))).await;
        assert!(catalog.fetch_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_products_field_is_empty_catalog() {
        let (_server, catalog) =
            catalog_serving(ResponseTemplate::new(200).set_body_json(json!({"total": 0}))).await;
        assert!(catalog.fetch_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_error_status_fails() {
        let (_server, catalog) = catalog_serving(ResponseTemplate::new(503)).await;
        match catalog.fetch_products().await {
            Err(CatalogError::Status(status)) => assert_eq!(status.as_u16(), 503),
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_fails() {
        let (_server, catalog) =
            catalog_serving(ResponseTemplate::new(200).set_body_string("<html>oops</html>")).await;
        assert!(matches!(
            catalog.fetch_products().await,
            Err(CatalogError::Request(_))
        ));
    }
}
