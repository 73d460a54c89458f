/// URL base de la API de productos
/// Configurada en tiempo de compilación:
/// - Por defecto: https://fakestoreapi.com
/// - Otra instancia o un mock server: via API_BASE_URL env var
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "https://fakestoreapi.com",
};

/// Centinela de "sin filtro de categoría"
pub const CATEGORY_ALL: &str = "all";

/// Tiempo de silencio antes de despachar la búsqueda al store
pub const SEARCH_DEBOUNCE_MS: u32 = 50;

/// Reintentos del query client ante errores de red o HTTP
pub const DEFAULT_RETRY_ATTEMPTS: u32 = 3;

/// Backoff exponencial entre reintentos: 1s, 2s, 4s... máx 30s
pub const RETRY_BASE_DELAY_MS: u32 = 1_000;
pub const RETRY_MAX_DELAY_MS: u32 = 30_000;

/// Skeleton cards mientras carga el catálogo
pub const SKELETON_CARDS: usize = 8;
