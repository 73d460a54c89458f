// ============================================================================
// CATALOG VIEWMODEL - categoría -> búsqueda -> orden -> conteo
// ============================================================================
// Función pura: se recalcula en cada cambio de filtros o del catálogo.
// Nunca muta ni vuelve a pedir los productos.
// ============================================================================

use crate::models::category::is_all;
use crate::models::{Product, SortOrder};
use crate::state::FiltersState;

/// Resultado derivado para la home
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogView {
    pub visible: Vec<Product>,
    pub count: usize,
    pub has_active_filters: bool,
}

impl CatalogView {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

pub fn derive_catalog(products: &[Product], filters: &FiltersState) -> CatalogView {
    filter_products(products, &filters.category, &filters.search, filters.sort)
}

pub fn filter_products(
    products: &[Product],
    category: &str,
    search: &str,
    sort: SortOrder,
) -> CatalogView {
    let category_needle = category.to_lowercase();
    let search_needle = search.to_lowercase();

    let mut visible: Vec<Product> = products
        .iter()
        .filter(|product| matches_category(product, category, &category_needle))
        .filter(|product| matches_search(product, &search_needle))
        .cloned()
        .collect();

    sort_by_price(&mut visible, sort);

    let count = visible.len();
    let has_active_filters = !is_all(category) || !search.is_empty() || !sort.is_default();

    CatalogView {
        visible,
        count,
        has_active_filters,
    }
}

/// Substring, no igualdad: "clothing" cubre men's y women's clothing.
/// Solo se pasa a minúsculas el filtro; la categoría del producto se compara tal cual.
fn matches_category(product: &Product, category: &str, needle: &str) -> bool {
    is_all(category) || product.category.contains(needle)
}

fn matches_search(product: &Product, needle: &str) -> bool {
    needle.is_empty()
        || product.title.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
}

/// `sort_by` es estable: precios iguales mantienen el orden de entrada
fn sort_by_price(products: &mut [Product], sort: SortOrder) {
    match sort {
        SortOrder::Default => {}
        SortOrder::PriceAscending => {
            products.sort_by(|a, b| a.price.total_cmp(&b.price));
        }
        SortOrder::PriceDescending => {
            products.sort_by(|a, b| b.price.total_cmp(&a.price));
        }
    }
}
