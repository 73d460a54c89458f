// ============================================================================
// MOCK API - Catálogo en memoria para desarrollo y tests
// ============================================================================
// Mismos 5 productos que los fixtures del backend mock.
// Activar con USE_MOCK_API=true (ver config.rs)
// ============================================================================

use gloo_timers::future::TimeoutFuture;

use crate::models::Product;
use crate::services::{ApiError, ProductSource};

pub fn mock_products() -> Vec<Product> {
    vec![
        mock(1, "Smartphone Pro Max", 999.99, "Latest smartphone with advanced features", "electronics", "smartphone"),
        mock(2, "Laptop Ultra", 1499.99, "Powerful laptop for professionals", "electronics", "laptop"),
        mock(3, "Winter Jacket", 89.99, "Warm jacket for cold weather", "men's clothing", "jacket"),
        mock(4, "Summer Dress", 49.99, "Light and comfortable summer dress", "women's clothing", "dress"),
        mock(5, "Gold Necklace", 299.99, "Elegant gold necklace", "jewelry", "necklace"),
    ]
}

fn mock(id: u32, title: &str, price: f64, description: &str, category: &str, image: &str) -> Product {
    Product {
        id,
        title: title.to_string(),
        price,
        description: description.to_string(),
        category: category.to_string(),
        image: format!("http://example.com/{}.jpg", image),
        rating: None,
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MockProductSource {
    products: Vec<Product>,
    latency_ms: u32,
}

impl MockProductSource {
    pub fn new() -> Self {
        Self::with_products(mock_products())
    }

    pub fn with_latency(latency_ms: u32) -> Self {
        Self {
            latency_ms,
            ..Self::new()
        }
    }

    /// Catálogo arbitrario (vacío para probar el empty state)
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products,
            latency_ms: 0,
        }
    }

    async fn simulate_latency(&self) {
        if self.latency_ms > 0 {
            TimeoutFuture::new(self.latency_ms).await;
        }
    }
}

impl ProductSource for MockProductSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
        self.simulate_latency().await;
        log::debug!("🧪 [MOCK] GET /products -> {}", self.products.len());
        Ok(self.products.clone())
    }

    async fn fetch_product(&self, id: u32) -> Result<Product, ApiError> {
        self.simulate_latency().await;
        log::debug!("🧪 [MOCK] GET /products/{}", id);
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ApiError::NotFound(id))
    }
}
