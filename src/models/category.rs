use crate::utils::constants::CATEGORY_ALL;

/// Pestaña del filtro de categorías
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryTab {
    pub value: &'static str,
    pub label: &'static str,
}

/// Pestañas visibles en la home. "clothing" cubre men's y women's clothing
/// porque el filtro compara por substring. "jewelery" es la ortografía de la API.
pub const CATEGORY_TABS: [CategoryTab; 4] = [
    CategoryTab { value: CATEGORY_ALL, label: "All" },
    CategoryTab { value: "electronics", label: "Electronics" },
    CategoryTab { value: "clothing", label: "Clothing" },
    CategoryTab { value: "jewelery", label: "Jewelry" },
];

pub fn is_all(category: &str) -> bool {
    category == CATEGORY_ALL
}
