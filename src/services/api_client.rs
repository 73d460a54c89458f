// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio ni caché (eso es del QueryClient)
// ============================================================================

use gloo_net::http::Request;

use crate::models::Product;
use crate::services::{ApiError, ProductSource};
use crate::utils::constants::API_BASE_URL;

/// Cliente de la API de productos
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    pub fn product_url(&self, id: u32) -> String {
        format!("{}/products/{}", self.base_url, id)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductSource for ApiClient {
    async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
        let url = self.products_url();
        log::info!("📦 GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Http {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        let products = response
            .json::<Vec<Product>>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        log::info!("✅ {} productos recibidos", products.len());
        Ok(products)
    }

    async fn fetch_product(&self, id: u32) -> Result<Product, ApiError> {
        let url = self.product_url(id);
        log::info!("📦 GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.status() == 404 {
            return Err(ApiError::NotFound(id));
        }

        if !response.ok() {
            return Err(ApiError::Http {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        decode_product(id, &body)
    }
}

/// La API devuelve 200 con cuerpo vacío para ids inexistentes
pub fn decode_product(id: u32, body: &str) -> Result<Product, ApiError> {
    let body = body.trim();
    if body.is_empty() || body == "null" {
        log::warn!("⚠️ Producto {} no existe (respuesta vacía)", id);
        return Err(ApiError::NotFound(id));
    }
    serde_json::from_str::<Product>(body).map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_urls_without_double_slash() {
        let client = ApiClient::with_base_url("https://fakestoreapi.com/");
        assert_eq!(client.products_url(), "https://fakestoreapi.com/products");
        assert_eq!(client.product_url(3), "https://fakestoreapi.com/products/3");
    }

    #[test]
    fn default_client_uses_compiled_base_url() {
        assert_eq!(ApiClient::default().base_url(), API_BASE_URL.trim_end_matches('/'));
    }

    #[test]
    fn empty_body_means_not_found() {
        assert_eq!(decode_product(99, ""), Err(ApiError::NotFound(99)));
        assert_eq!(decode_product(99, "  \n"), Err(ApiError::NotFound(99)));
        assert_eq!(decode_product(99, "null"), Err(ApiError::NotFound(99)));
    }

    #[test]
    fn decodes_a_product_body() {
        let body = r#"{"id":2,"title":"Laptop Ultra","price":1499.99,"description":"Powerful laptop for professionals","category":"electronics","image":"http://example.com/laptop.jpg"}"#;
        let product = decode_product(2, body).unwrap();
        assert_eq!(product.title, "Laptop Ultra");
    }

    #[test]
    fn garbage_is_a_parse_error() {
        assert!(matches!(decode_product(1, "<html>"), Err(ApiError::Parse(_))));
    }
}
