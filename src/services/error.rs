use thiserror::Error;

/// Errores de la fuente de productos (red, HTTP, parseo, no encontrado)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Product {0} not found")]
    NotFound(u32),
}

impl ApiError {
    /// Un 404 no mejora reintentando
    pub fn is_retryable(&self) -> bool {
        !matches!(self, ApiError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_final() {
        assert!(!ApiError::NotFound(42).is_retryable());
        assert!(ApiError::Network("offline".into()).is_retryable());
        assert!(ApiError::Http { status: 503, status_text: "Service Unavailable".into() }.is_retryable());
    }

    #[test]
    fn messages_are_readable() {
        let err = ApiError::Http { status: 500, status_text: "Internal Server Error".into() };
        assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
        assert_eq!(ApiError::NotFound(7).to_string(), "Product 7 not found");
    }
}
