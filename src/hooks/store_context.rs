// ============================================================================
// STORE CONTEXT - Compartir el AppState entre componentes
// ============================================================================
// El store se construye en StoreProvider (estado inicial inyectable) y se
// expone vía Context API de Yew. Sin singletons globales.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::models::{Product, SortOrder};
use crate::state::{
    AppAction, AppState, FavoritesAction, FavoritesState, FilterAction, FilterField, FiltersState,
};

/// Handle del store: lectura de snapshots + acciones
#[derive(Clone, PartialEq)]
pub struct StoreHandle {
    state: UseReducerHandle<AppState>,
}

impl StoreHandle {
    pub fn filters(&self) -> Rc<FiltersState> {
        self.state.filters.clone()
    }

    pub fn favorites(&self) -> Rc<FavoritesState> {
        self.state.favorites.clone()
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.state.favorites.is_favorite(id)
    }

    pub fn select_category(&self, value: impl Into<String>) {
        self.dispatch(FilterAction::CategorySelected(value.into()));
    }

    pub fn set_sort(&self, value: SortOrder) {
        self.dispatch(FilterAction::Sorted(value));
    }

    pub fn set_search(&self, value: impl Into<String>) {
        self.dispatch(FilterAction::SearchChanged(value.into()));
    }

    pub fn reset_filter_fields(&self, fields: Vec<FilterField>) {
        self.dispatch(FilterAction::ResetFields(fields));
    }

    pub fn reset_filters(&self) {
        self.dispatch(FilterAction::ResetAll);
    }

    pub fn toggle_favorite(&self, product: Product) {
        self.dispatch(FavoritesAction::Toggled(product));
    }

    pub fn reset_favorites(&self) {
        self.dispatch(FavoritesAction::Reset);
    }

    fn dispatch(&self, action: impl Into<AppAction>) {
        self.state.dispatch(action.into());
    }
}

#[derive(Properties, PartialEq)]
pub struct StoreProviderProps {
    /// Estado inicial (tests, demos); por defecto filtros y favoritos vacíos
    #[prop_or_default]
    pub initial: AppState,
    pub children: Children,
}

/// Provider que envuelve la app y crea el store una sola vez
#[function_component(StoreProvider)]
pub fn store_provider(props: &StoreProviderProps) -> Html {
    let initial = props.initial.clone();
    let state = use_reducer(move || initial);

    html! {
        <ContextProvider<StoreHandle> context={StoreHandle { state }}>
            {props.children.clone()}
        </ContextProvider<StoreHandle>>
    }
}

#[hook]
pub fn use_store() -> StoreHandle {
    use_context::<StoreHandle>().expect("use_store() fuera de <StoreProvider>")
}
