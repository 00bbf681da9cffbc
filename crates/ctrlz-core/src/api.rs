//! Product API Access
//!
//! [`ProductSource`] abstracts where the catalog comes from. The HTTP source
//! talks to the external API.

use async_trait::async_trait;

use crate::PRODUCTS_PATH;
use crate::config::ApiConfig;
use crate::error::{Result, StoreError};
use crate::model::{Product, decode_products};

/// Catalog source (Strategy pattern)
///
/// Browser futures are not `Send`, so the wasm build drops the bound.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ProductSource {
    /// Fetch the full catalog, in the order the source returns it
    async fn fetch_products(&self) -> Result<Vec<Product>>;

    /// Source name for logs
    fn name(&self) -> &str;
}

/// Reads JSON resources from `base + path`
#[derive(Clone, Debug)]
pub struct HttpProductSource {
    config: ApiConfig,
    client: reqwest::Client,
}

impl HttpProductSource {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Join a resource path onto the base, rejecting anything that would
    /// escape it
    pub fn resolve(&self, path: &str) -> Result<String> {
        if !path.starts_with('/') || path.contains("://") || path.split('/').any(|s| s == "..") {
            return Err(StoreError::InvalidPath(path.to_string()));
        }
        Ok(format!("{}{}", self.config.base_url, path))
    }

    /// GET a resource and return its body as untyped JSON
    ///
    /// Any non-success status is reported as a plain network error.
    pub async fn fetch_json(&self, path: &str) -> Result<serde_json::Value> {
        let url = self.resolve(path)?;
        tracing::debug!(%url, "fetching");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Network(format!("{url} answered {status}")));
        }

        Ok(response.json().await?)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ProductSource for HttpProductSource {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        let body = self.fetch_json(PRODUCTS_PATH).await?;
        decode_products(body)
    }

    fn name(&self) -> &str {
        "http"
    }
}

/// In-memory catalog
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct StaticProductSource {
    products: Vec<Product>,
}

#[cfg(test)]
impl StaticProductSource {
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// A small catalog covering every filter category
    pub fn demo() -> Self {
        use rust_decimal_macros::dec;

        Self::new(vec![
            Product::new(1_u64, "Glitch Tee", dec!(40))
                .with_category("Men")
                .with_images(["/img/glitch-tee.jpg"]),
            Product::new(2_u64, "Undo Hoodie", dec!(95))
                .with_category("Unisex")
                .with_images(["/img/undo-hoodie.jpg", "/img/undo-hoodie-back.jpg"]),
            Product::new(3_u64, "Neon Cargo", dec!(120))
                .with_category("Women")
                .with_images(["/img/neon-cargo.jpg"]),
            Product::new(4_u64, "Crimson Cap", dec!(29.99))
                .with_category("Accessories")
                .with_images(["/img/crimson-cap.jpg"]),
            Product::new(5_u64, "Static Crop Top", dec!(45))
                .with_category("women")
                .with_images(["/img/static-crop.jpg"]),
        ])
    }
}

#[cfg(test)]
#[async_trait]
impl ProductSource for StaticProductSource {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;

    fn source_for(server: &mockito::Server) -> HttpProductSource {
        HttpProductSource::new(ApiConfig::new(server.url()))
    }

    #[tokio::test]
    async fn test_fetch_products_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/products")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id":1,"name":"Tee","price":40,"category":"Men","images":["a.jpg"]}]"#)
            .expect(1)
            .create_async()
            .await;

        let products = source_for(&server).fetch_products().await.unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, ProductId::Number(1));
        assert_eq!(products[0].name, "Tee");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_server_error_is_network_error() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/products")
            .with_status(500)
            .expect(1)
            .create_async()
            .await;

        let err = source_for(&server).fetch_products().await.unwrap_err();

        assert!(matches!(err, StoreError::Network(_)));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_not_found_is_network_error_without_retry() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/products")
            .with_status(404)
            .expect(1)
            .create_async()
            .await;

        let err = source_for(&server).fetch_json("/api/products").await.unwrap_err();

        assert!(err.is_fetch_failure());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_json_is_untyped() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/banner")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"headline":"Drop 07"}"#)
            .create_async()
            .await;

        let value = source_for(&server).fetch_json("/api/banner").await.unwrap();
        assert_eq!(value["headline"], "Drop 07");
    }

    #[tokio::test]
    async fn test_malformed_body_is_schema_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/products")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id":1,"price":"free"}]"#)
            .create_async()
            .await;

        let err = source_for(&server).fetch_products().await.unwrap_err();
        assert!(matches!(err, StoreError::Schema(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let source = HttpProductSource::new(ApiConfig::new("http://127.0.0.1:9"));
        let err = source.fetch_products().await.unwrap_err();
        assert!(err.is_fetch_failure());
    }

    #[test]
    fn test_resolve_paths() {
        let source = HttpProductSource::new(ApiConfig::new("https://api.ctrlz.shop/"));
        assert_eq!(
            source.resolve("/api/products").unwrap(),
            "https://api.ctrlz.shop/api/products"
        );
        assert!(matches!(source.resolve("api/products"), Err(StoreError::InvalidPath(_))));
        assert!(matches!(source.resolve("/../admin"), Err(StoreError::InvalidPath(_))));
        assert!(matches!(
            source.resolve("/https://evil.example"),
            Err(StoreError::InvalidPath(_))
        ));
    }

    #[tokio::test]
    async fn test_static_source_keeps_order() {
        let products = StaticProductSource::demo().fetch_products().await.unwrap();
        let ids: Vec<String> = products.iter().map(|p| p.id.to_string()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);
    }
}
