// ============================================================================
// PRODUCT SOURCE - De dónde sale el catálogo (API real o mocks)
// ============================================================================

use crate::config::AppConfig;
use crate::models::Product;
use crate::services::{ApiClient, ApiError, MockProductSource};

/// Colaborador remoto: `GET /products` y `GET /products/{id}`.
/// Futures no-Send: todo corre en el hilo del navegador.
#[allow(async_fn_in_trait)]
pub trait ProductSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, ApiError>;

    async fn fetch_product(&self, id: u32) -> Result<Product, ApiError>;
}

/// Fuente elegida al arrancar según la config
#[derive(Clone, Debug)]
pub enum CatalogSource {
    Http(ApiClient),
    Mock(MockProductSource),
}

impl CatalogSource {
    pub fn from_config(config: &AppConfig) -> Self {
        if config.use_mock_api {
            log::info!("🧪 Usando catálogo mock ({} ms de latencia)", config.mock_latency_ms);
            CatalogSource::Mock(MockProductSource::with_latency(config.mock_latency_ms))
        } else {
            log::info!("🌐 Usando API: {}", config.api_base_url);
            CatalogSource::Http(ApiClient::with_base_url(&config.api_base_url))
        }
    }
}

impl ProductSource for CatalogSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
        match self {
            CatalogSource::Http(client) => client.fetch_products().await,
            CatalogSource::Mock(mock) => mock.fetch_products().await,
        }
    }

    async fn fetch_product(&self, id: u32) -> Result<Product, ApiError> {
        match self {
            CatalogSource::Http(client) => client.fetch_product(id).await,
            CatalogSource::Mock(mock) => mock.fetch_product(id).await,
        }
    }
}
