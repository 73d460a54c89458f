// ============================================================================
// APP - Raíz: providers (query, store, rutas) + navegación + página actual
// ============================================================================

use yew::prelude::*;

use crate::components::AppNavigation;
use crate::config::CONFIG;
use crate::hooks::{use_route, QueryClientHandle, QueryProvider, RouteProvider, StoreProvider};
use crate::routes::Route;
use crate::views::{FavouritesView, HomeView, NotFoundView, ProductView};

#[function_component(App)]
pub fn app() -> Html {
    // Un QueryClient por montaje de la app
    let client = use_memo((), |_| {
        log::info!(
            "🛍️ Catálogo: {} (mock: {})",
            CONFIG.api_base_url,
            CONFIG.use_mock_api
        );
        QueryClientHandle::from_config(&CONFIG)
    });

    html! {
        <QueryProvider client={(*client).clone()}>
            <StoreProvider>
                <RouteProvider>
                    <AppNavigation />
                    <main class="app-main">
                        <CurrentPage />
                    </main>
                </RouteProvider>
            </StoreProvider>
        </QueryProvider>
    }
}

#[function_component(CurrentPage)]
fn current_page() -> Html {
    match use_route().route {
        Route::Home => html! { <HomeView /> },
        Route::Favourites => html! { <FavouritesView /> },
        Route::Product(id) => html! { <ProductView {id} /> },
        Route::NotFound => html! { <NotFoundView /> },
    }
}
