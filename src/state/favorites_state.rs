// ============================================================================
// FAVORITES STATE - lista ordenada de productos favoritos (única por id)
// ============================================================================

use std::rc::Rc;

use yew::functional::Reducible;

use crate::models::Product;

/// Copias de los productos tomadas al marcar; no se re-sincronizan con el catálogo
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FavoritesState {
    favourites: Vec<Product>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FavoritesAction {
    Toggled(Product),
    Reset,
}

impl FavoritesState {
    pub fn from_products(products: Vec<Product>) -> Self {
        let mut state = Self::default();
        for product in products {
            if !state.is_favorite(product.id) {
                state.favourites.push(product);
            }
        }
        state
    }

    /// Quita por id si ya está (los demás campos del producto se ignoran),
    /// si no lo añade al final
    pub fn toggle(&self, product: Product) -> Self {
        let favourites = if self.is_favorite(product.id) {
            self.favourites
                .iter()
                .filter(|fav| fav.id != product.id)
                .cloned()
                .collect()
        } else {
            let mut next = self.favourites.clone();
            next.push(product);
            next
        };
        Self { favourites }
    }

    pub fn reset_all(&self) -> Self {
        Self::default()
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.favourites.iter().any(|fav| fav.id == id)
    }

    pub fn items(&self) -> &[Product] {
        &self.favourites
    }

    pub fn len(&self) -> usize {
        self.favourites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favourites.is_empty()
    }

    pub fn apply(&self, action: FavoritesAction) -> Self {
        match action {
            FavoritesAction::Toggled(product) => self.toggle(product),
            FavoritesAction::Reset => self.reset_all(),
        }
    }
}

impl Reducible for FavoritesState {
    type Action = FavoritesAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::mock_api::mock_products;

    fn product(id: u32) -> Product {
        mock_products()
            .into_iter()
            .find(|p| p.id == id)
            .unwrap()
    }

    fn ids(state: &FavoritesState) -> Vec<u32> {
        state.items().iter().map(|p| p.id).collect()
    }

    #[test]
    fn starts_empty() {
        let state = FavoritesState::default();
        assert!(state.is_empty());
        assert!(!state.is_favorite(1));
    }

    #[test]
    fn toggle_adds_snapshot_to_the_end() {
        let state = FavoritesState::default().toggle(product(2)).toggle(product(5));
        assert_eq!(ids(&state), vec![2, 5]);
        assert_eq!(state.items()[1], product(5));
    }

    #[test]
    fn toggling_twice_restores_contents_and_order() {
        let original = FavoritesState::default().toggle(product(1)).toggle(product(3));
        let round_trip = original.toggle(product(4)).toggle(product(4));
        assert_eq!(round_trip, original);
    }

    #[test]
    fn removal_matches_by_id_not_by_value() {
        let state = FavoritesState::default().toggle(product(1));
        let renamed = Product {
            title: "Updated Title".to_string(),
            price: 1.0,
            ..product(1)
        };

        let state = state.toggle(renamed);
        assert!(state.is_empty());
    }

    #[test]
    fn removal_keeps_remaining_order() {
        let state = FavoritesState::default()
            .toggle(product(1))
            .toggle(product(2))
            .toggle(product(3))
            .toggle(product(4));

        let state = state.toggle(product(2));
        assert_eq!(ids(&state), vec![1, 3, 4]);
    }

    #[test]
    fn snapshot_is_not_resynchronized() {
        let state = FavoritesState::default().toggle(product(3));
        let mut catalog_copy = product(3);
        catalog_copy.price = 10.0;

        assert_eq!(state.items()[0].price, 89.99);
        assert!(state.is_favorite(catalog_copy.id));
    }

    #[test]
    fn reset_empties_the_collection() {
        let state = FavoritesState::default().toggle(product(1)).toggle(product(2));
        assert_eq!(state.reset_all().len(), 0);
        assert_eq!(FavoritesState::default().reset_all(), FavoritesState::default());
    }

    #[test]
    fn from_products_drops_duplicate_ids() {
        let state = FavoritesState::from_products(vec![product(2), product(5), product(2)]);
        assert_eq!(ids(&state), vec![2, 5]);
    }

    #[test]
    fn reducer_toggles_and_resets() {
        let state = Rc::new(FavoritesState::default())
            .reduce(FavoritesAction::Toggled(product(2)))
            .reduce(FavoritesAction::Toggled(product(5)));
        assert_eq!(ids(&state), vec![2, 5]);

        let state = state.reduce(FavoritesAction::Reset);
        assert!(state.is_empty());
    }
}
