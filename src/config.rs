use serde::{Deserialize, Serialize};

use crate::utils::constants::{
    API_BASE_URL, DEFAULT_RETRY_ATTEMPTS, RETRY_BASE_DELAY_MS, SEARCH_DEBOUNCE_MS,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub environment: String,
    pub enable_logging: bool,
    /// Servir el catálogo desde los mocks en memoria en vez de la API
    pub use_mock_api: bool,
    pub mock_latency_ms: u32,
    pub retry_attempts: u32,
    /// Primer intervalo del backoff; se duplica en cada reintento
    pub retry_base_delay_ms: u32,
    /// `None`: el catálogo se pide una vez por sesión
    pub stale_time_seconds: Option<i64>,
    pub search_debounce_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: API_BASE_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            use_mock_api: false,
            mock_latency_ms: 0,
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
            retry_base_delay_ms: RETRY_BASE_DELAY_MS,
            stale_time_seconds: None,
            search_debounce_ms: SEARCH_DEBOUNCE_MS,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: defaults.api_base_url,
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            use_mock_api: option_env!("USE_MOCK_API")
                .unwrap_or("false").parse().unwrap_or(false),
            mock_latency_ms: option_env!("MOCK_LATENCY_MS")
                .unwrap_or("0").parse().unwrap_or(0),
            retry_attempts: option_env!("RETRY_ATTEMPTS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.retry_attempts),
            retry_base_delay_ms: option_env!("RETRY_BASE_DELAY_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.retry_base_delay_ms),
            stale_time_seconds: option_env!("STALE_TIME_SECONDS")
                .and_then(|v| v.parse().ok()),
            search_debounce_ms: option_env!("SEARCH_DEBOUNCE_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.search_debounce_ms),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Nivel del logger de consola
    pub fn log_level(&self) -> log::Level {
        match (self.enable_logging, self.is_production()) {
            (false, _) => log::Level::Error,
            (true, true) => log::Level::Info,
            (true, false) => log::Level::Debug,
        }
    }

    pub fn stale_after(&self) -> Option<chrono::Duration> {
        self.stale_time_seconds.map(chrono::Duration::seconds)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fetch_once_per_session() {
        let config = AppConfig::default();
        assert_eq!(config.stale_after(), None);
        assert_eq!(config.search_debounce_ms, 50);
        assert_eq!(config.retry_attempts, 3);
        assert_eq!(config.retry_base_delay_ms, 1_000);
        assert!(!config.use_mock_api);
    }

    #[test]
    fn log_level_follows_environment() {
        let mut config = AppConfig::default();
        assert_eq!(config.log_level(), log::Level::Debug);

        config.environment = "production".to_string();
        assert_eq!(config.log_level(), log::Level::Info);

        config.enable_logging = false;
        assert_eq!(config.log_level(), log::Level::Error);
    }

    #[test]
    fn stale_time_converts_to_duration() {
        let config = AppConfig {
            stale_time_seconds: Some(30),
            ..AppConfig::default()
        };
        assert_eq!(config.stale_after(), Some(chrono::Duration::seconds(30)));
    }
}
