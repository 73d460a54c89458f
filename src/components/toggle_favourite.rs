use yew::prelude::*;

use crate::hooks::use_store;
use crate::models::Product;

#[derive(Properties, PartialEq)]
pub struct ToggleFavouriteProps {
    pub product: Product,
    #[prop_or_default]
    pub class: Classes,
    /// Solo icono (tarjetas); sin él se muestra también el texto
    #[prop_or(false)]
    pub compact: bool,
}

#[function_component(ToggleFavourite)]
pub fn toggle_favourite(props: &ToggleFavouriteProps) -> Html {
    let store = use_store();
    let is_favorite = store.is_favorite(props.product.id);

    let onclick = {
        let product = props.product.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            e.prevent_default();
            store.toggle_favorite(product.clone());
        })
    };

    let label = if is_favorite {
        "Remove from Favorites"
    } else {
        "Add to Favorites"
    };
    let aria_label = if is_favorite {
        format!("Remove {} from favorites", props.product.title)
    } else {
        format!("Add {} to favorites", props.product.title)
    };

    html! {
        <button
            type="button"
            class={classes!("toggle-favourite", is_favorite.then_some("is-favorite"), props.class.clone())}
            data-favorite={is_favorite.to_string()}
            aria-label={aria_label}
            aria-pressed={is_favorite.to_string()}
            {onclick}
        >
            <span class="icon">{ if is_favorite { "♥" } else { "♡" } }</span>
            if !props.compact {
                <span>{label}</span>
            }
        </button>
    }
}
