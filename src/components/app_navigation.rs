// ============================================================================
// APP NAVIGATION - Cabecera fija: marca, búsqueda, carrito, favoritos
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::Link;
use crate::config::CONFIG;
use crate::hooks::{use_debounced_callback, use_store};
use crate::routes::Route;

#[function_component(AppNavigation)]
pub fn app_navigation() -> Html {
    let store = use_store();
    let favourites_count = store.favorites().len();

    html! {
        <header class="app-navigation">
            <div class="app-navigation-inner">
                <Link to={Route::Home} class="brand">{"FakeStore"}</Link>

                <SearchBar />

                <nav class="app-navigation-actions">
                    <button type="button" class="icon-button" aria-label="View Cart">
                        <span class="icon">{"🛒"}</span>
                    </button>
                    <Link to={Route::Favourites} class="icon-button" aria_label="View Favorites">
                        <span class="icon">{"♥"}</span>
                        if favourites_count > 0 {
                            <span class="badge">{favourites_count.to_string()}</span>
                        }
                    </Link>
                </nav>
            </div>
        </header>
    }
}

/// Último valor de búsqueda que el input despachó al store
#[derive(Debug)]
struct SearchEcho {
    dispatched: String,
}

impl SearchEcho {
    fn new(store_value: &str) -> Self {
        Self {
            dispatched: store_value.to_string(),
        }
    }

    fn record(&mut self, value: &str) {
        self.dispatched = value.to_string();
    }

    /// `true` si el store cambió por otra vía (p.ej. "Clear all filters").
    /// En ese caso lo pendiente sobra y el input se resincroniza.
    fn is_external(&mut self, store_value: &str) -> bool {
        if self.dispatched == store_value {
            return false;
        }
        self.dispatched = store_value.to_string();
        true
    }
}

/// Input de búsqueda: el valor local se actualiza en cada tecla,
/// el store solo tras el debounce.
#[function_component(SearchBar)]
pub fn search_bar() -> Html {
    let store = use_store();
    let search = store.filters().search.clone();
    let local_value = use_state(|| search.clone());
    let echo = {
        let search = search.clone();
        use_mut_ref(move || SearchEcho::new(&search))
    };

    let debounced_search = {
        let store = store.clone();
        let echo = echo.clone();
        use_debounced_callback(
            Callback::from(move |value: String| {
                echo.borrow_mut().record(&value);
                store.set_search(value);
            }),
            CONFIG.search_debounce_ms,
        )
    };

    // Store -> input: un cambio externo descarta la búsqueda pendiente
    {
        let local_value = local_value.clone();
        let debounced_search = debounced_search.clone();
        use_effect_with(search, move |search| {
            if echo.borrow_mut().is_external(search) {
                debounced_search.cancel();
                local_value.set(search.clone());
            }
            || ()
        });
    }

    let oninput = {
        let local_value = local_value.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            local_value.set(value.clone());
            debounced_search.emit(value);
        })
    };

    html! {
        <label class="search-bar">
            <span class="sr-only">{"Search Products"}</span>
            <input
                type="search"
                placeholder="Search products..."
                value={(*local_value).clone()}
                {oninput}
            />
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn own_dispatch_is_not_external() {
        let mut echo = SearchEcho::new("");
        echo.record("pho");
        assert!(!echo.is_external("pho"));
    }

    #[test]
    fn clear_all_filters_is_external() {
        let mut echo = SearchEcho::new("");
        echo.record("phone");

        // reset_all deja search en ""
        assert!(echo.is_external(""));
        // Una vez resincronizado deja de serlo
        assert!(!echo.is_external(""));
    }

    #[test]
    fn initial_store_value_is_not_external() {
        let mut echo = SearchEcho::new("laptop");
        assert!(!echo.is_external("laptop"));
    }
}
