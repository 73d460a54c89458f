// ============================================================================
// USE PRODUCTS - Catálogo y detalle vía QueryClient
// ============================================================================
// Si la caché ya tiene el dato se pinta directamente, si no Loading + fetch.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;

use crate::hooks::use_query_client;
use crate::models::Product;
use crate::services::QueryState;

#[hook]
pub fn use_products() -> QueryState<Vec<Product>> {
    let client = use_query_client();
    let state = {
        let client = client.clone();
        use_state(move || {
            client
                .cached_products()
                .map(QueryState::Ready)
                .unwrap_or(QueryState::Loading)
        })
    };

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            if state.is_loading() {
                wasm_bindgen_futures::spawn_local(async move {
                    let result = client.fetch_products().await;
                    state.set(QueryState::from_result(result));
                });
            }
            || ()
        });
    }

    (*state).clone()
}

#[hook]
pub fn use_product(id: u32) -> QueryState<Product> {
    let client = use_query_client();
    let state = use_state(|| QueryState::Loading);

    {
        let state = state.clone();
        use_effect_with(id, move |&id| {
            // Respuesta de un id anterior: se descarta
            let cancelled = Rc::new(Cell::new(false));

            match client.cached_product(id) {
                Some(product) => state.set(QueryState::Ready(product)),
                None => {
                    state.set(QueryState::Loading);
                    let cancelled = cancelled.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        let result = client.fetch_product(id).await;
                        if !cancelled.get() {
                            state.set(QueryState::from_result(result));
                        }
                    });
                }
            }

            move || cancelled.set(true)
        });
    }

    (*state).clone()
}
