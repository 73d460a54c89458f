// ============================================================================
// ROUTES - "/", "/favourites", "/{productId}"
// ============================================================================

use wasm_bindgen::JsValue;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Favourites,
    Product(u32),
    NotFound,
}

impl Route {
    /// Reconoce un pathname (se ignora la barra final)
    pub fn recognize(path: &str) -> Self {
        let path = path.trim_end_matches('/');
        match path {
            "" => Route::Home,
            "/favourites" => Route::Favourites,
            other => other
                .strip_prefix('/')
                .filter(|segment| !segment.contains('/'))
                .and_then(|segment| segment.parse::<u32>().ok())
                .filter(|id| *id > 0)
                .map(Route::Product)
                .unwrap_or(Route::NotFound),
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Favourites => "/favourites".to_string(),
            Route::Product(id) => format!("/{}", id),
            Route::NotFound => "/not-found".to_string(),
        }
    }

    /// Ruta actual del navegador
    pub fn current() -> Self {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .map(|path| Route::recognize(&path))
            .unwrap_or(Route::Home)
    }

    /// `history.pushState` + scroll arriba; no dispara popstate
    pub fn push(&self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        window
            .history()?
            .push_state_with_url(&JsValue::NULL, "", Some(&self.to_path()))?;
        window.scroll_to_with_x_and_y(0.0, 0.0);
        Ok(())
    }
}
