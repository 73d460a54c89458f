// ============================================================================
// FAKESTORE PWA - Catálogo, búsqueda, orden y favoritos (Yew + WASM)
// ============================================================================
// - state: slices de filtros y favoritos (reducers puros) + AppState
// - viewmodels: pipeline catálogo + filtros -> productos visibles
// - services: fuentes de productos (API / mock) + QueryClient con caché
// - hooks: contextos (store, query, rutas) y hooks de datos
// - components / views: UI
// ============================================================================

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

use crate::components::App;
use crate::config::CONFIG;

/// Arranca la app en el navegador
pub fn run() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 FakeStore PWA - Yew + WASM ({})", CONFIG.environment);

    yew::Renderer::<App>::new().render();
}
