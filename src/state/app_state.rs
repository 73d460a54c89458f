// ============================================================================
// APP STATE - Contenedor único de los slices (filters + favorites)
// ============================================================================
// Se construye explícitamente al arrancar y se inyecta vía context (StoreProvider).
// Un solo escritor (dispatch), muchos lectores (componentes).
// ============================================================================

use std::rc::Rc;

use yew::functional::Reducible;

use crate::state::{FavoritesAction, FavoritesState, FilterAction, FiltersState};

/// Snapshot inmutable del store. El slice que no cambia se comparte (mismo `Rc`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub filters: Rc<FiltersState>,
    pub favorites: Rc<FavoritesState>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum AppAction {
    Filters(FilterAction),
    Favorites(FavoritesAction),
}

impl From<FilterAction> for AppAction {
    fn from(action: FilterAction) -> Self {
        AppAction::Filters(action)
    }
}

impl From<FavoritesAction> for AppAction {
    fn from(action: FavoritesAction) -> Self {
        AppAction::Favorites(action)
    }
}

impl AppState {
    pub fn new(filters: FiltersState, favorites: FavoritesState) -> Self {
        Self {
            filters: Rc::new(filters),
            favorites: Rc::new(favorites),
        }
    }
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AppAction::Filters(action) => {
                log::debug!("🔎 [STORE] filters <- {:?}", action);
                let filters = self.filters.clone().reduce(action);
                Rc::new(AppState {
                    filters,
                    favorites: self.favorites.clone(),
                })
            }
            AppAction::Favorites(action) => {
                log::debug!("💖 [STORE] favorites <- {:?}", action);
                let favorites = self.favorites.clone().reduce(action);
                log::debug!("💖 [STORE] {} favoritos", favorites.len());
                Rc::new(AppState {
                    filters: self.filters.clone(),
                    favorites,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SortOrder;
    use crate::services::mock_api::mock_products;

    #[test]
    fn filter_actions_leave_favorites_shared() {
        let state = Rc::new(AppState::default());
        let next = state
            .clone()
            .reduce(FilterAction::Sorted(SortOrder::PriceAscending).into());

        assert_eq!(next.filters.sort, SortOrder::PriceAscending);
        assert!(Rc::ptr_eq(&state.favorites, &next.favorites));
        assert!(!Rc::ptr_eq(&state.filters, &next.filters));
    }

    #[test]
    fn favorite_actions_leave_filters_shared() {
        let product = mock_products().remove(0);
        let state = Rc::new(AppState::new(
            FiltersState::default().set_search("phone"),
            FavoritesState::default(),
        ));

        let next = state
            .clone()
            .reduce(FavoritesAction::Toggled(product).into());

        assert!(next.favorites.is_favorite(1));
        assert!(Rc::ptr_eq(&state.filters, &next.filters));
        assert_eq!(next.filters.search, "phone");
    }

    #[test]
    fn injected_initial_state_is_kept() {
        let favorites = FavoritesState::from_products(mock_products());
        let state = AppState::new(FiltersState::default(), favorites.clone());
        assert_eq!(*state.favorites, favorites);
        assert_eq!(*state.filters, FiltersState::default());
    }
}
