use yew::prelude::*;

use crate::components::{EmptyState, ProductList};
use crate::hooks::use_store;

#[function_component(FavouritesView)]
pub fn favourites_view() -> Html {
    let favorites = use_store().favorites();

    html! {
        <div class="page favourites">
            <h1>{"Favourites"}</h1>
            if favorites.is_empty() {
                <EmptyState has_filters={false} />
            } else {
                <ProductList products={favorites.items().to_vec()} />
            }
        </div>
    }
}
