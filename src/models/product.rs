use serde::{Deserialize, Serialize};

/// Producto del catálogo tal como lo devuelve `GET /products`.
/// Nunca se construye ni se modifica localmente fuera de fixtures.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Product {
    pub id: u32,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,

    // Solo lo trae la API real, los mocks no lo incluyen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

#[derive(Clone, Copy, PartialEq, Serialize, Deserialize, Debug)]
pub struct Rating {
    pub rate: f64,
    pub count: u32,
}

impl Product {
    /// Precio formateado para las cards (`$49.99`)
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_api_payload_with_rating() {
        let json = r#"{
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.category, "men's clothing");
        assert_eq!(product.rating, Some(Rating { rate: 3.9, count: 120 }));
    }

    #[test]
    fn rating_is_optional() {
        let json = r#"{
            "id": 5,
            "title": "Gold Necklace",
            "price": 299.99,
            "description": "Elegant gold necklace",
            "category": "jewelry",
            "image": "http://example.com/necklace.jpg"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.rating.is_none());
        assert_eq!(product.display_price(), "$299.99");
    }

    #[test]
    fn rejects_negative_id() {
        let json = r#"{"id": -1, "title": "x", "price": 1.0, "description": "", "category": "", "image": ""}"#;
        assert!(serde_json::from_str::<Product>(json).is_err());
    }
}
