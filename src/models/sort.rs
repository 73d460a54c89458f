use serde::{Deserialize, Serialize};

/// Orden de la lista de productos.
///
/// Los valores que llegan del select (o de estados antiguos) son strings abiertos:
/// `None` es el orden de entrada, `"price-asc"` ascendente y cualquier otro valor
/// no nulo cae en descendente.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Default,
    PriceAscending,
    PriceDescending,
}

impl SortOrder {
    /// Todas las opciones en el orden del select
    pub const ALL: [SortOrder; 3] = [
        SortOrder::Default,
        SortOrder::PriceAscending,
        SortOrder::PriceDescending,
    ];

    /// Convierte un valor legacy (`string | null`) al enum cerrado
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            None => SortOrder::Default,
            Some("price-asc") => SortOrder::PriceAscending,
            Some("price-desc") => SortOrder::PriceDescending,
            Some(other) => {
                log::warn!("⚠️ Orden desconocido '{}', usando price-desc", other);
                SortOrder::PriceDescending
            }
        }
    }

    /// Valor legacy equivalente (`None` = sin orden)
    pub fn as_value(&self) -> Option<&'static str> {
        match self {
            SortOrder::Default => None,
            SortOrder::PriceAscending => Some("price-asc"),
            SortOrder::PriceDescending => Some("price-desc"),
        }
    }

    /// Valor del `<option>`; el orden por defecto usa "none"
    pub fn option_value(&self) -> &'static str {
        self.as_value().unwrap_or("none")
    }

    pub fn from_option_value(value: &str) -> Self {
        match value {
            "none" => SortOrder::Default,
            other => SortOrder::from_value(Some(other)),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Default => "Default",
            SortOrder::PriceAscending => "Price: Low to High",
            SortOrder::PriceDescending => "Price: High to Low",
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, SortOrder::Default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_means_input_order() {
        assert_eq!(SortOrder::from_value(None), SortOrder::Default);
        assert!(SortOrder::from_value(None).is_default());
    }

    #[test]
    fn known_values_map_to_price_orders() {
        assert_eq!(SortOrder::from_value(Some("price-asc")), SortOrder::PriceAscending);
        assert_eq!(SortOrder::from_value(Some("price-desc")), SortOrder::PriceDescending);
    }

    #[test]
    fn unknown_values_fall_back_to_descending() {
        assert_eq!(SortOrder::from_value(Some("bogus")), SortOrder::PriceDescending);
        assert_eq!(SortOrder::from_value(Some("default")), SortOrder::PriceDescending);
        assert_eq!(SortOrder::from_value(Some("")), SortOrder::PriceDescending);
    }

    #[test]
    fn option_values_use_none_for_default() {
        assert_eq!(SortOrder::Default.option_value(), "none");
        assert_eq!(SortOrder::from_option_value("none"), SortOrder::Default);
        for order in SortOrder::ALL {
            assert_eq!(SortOrder::from_option_value(order.option_value()), order);
        }
    }

    #[test]
    fn labels_match_select_texts() {
        assert_eq!(SortOrder::PriceAscending.label(), "Price: Low to High");
        assert_eq!(SortOrder::PriceDescending.label(), "Price: High to Low");
        assert_eq!(SortOrder::Default.label(), "Default");
    }
}
