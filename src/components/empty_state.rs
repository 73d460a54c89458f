use yew::prelude::*;

use crate::hooks::use_store;

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
    pub has_filters: bool,
}

/// Título y descripción según haya filtros activos o no
pub fn empty_state_copy(has_filters: bool) -> (&'static str, &'static str) {
    if has_filters {
        (
            "No products found",
            "No products match your current filters. Try adjusting your search term or selecting a different category.",
        )
    } else {
        (
            "No products available",
            "There are no products available at the moment. Please check back later.",
        )
    }
}

#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    let store = use_store();
    let (title, description) = empty_state_copy(props.has_filters);

    let on_clear = Callback::from(move |_: MouseEvent| {
        log::info!("🧹 Limpiando filtros");
        store.reset_filters();
    });

    html! {
        <div class="empty-state">
            <div class="empty-state-icon">{"📦"}</div>
            <h3 class="empty-state-title">{title}</h3>
            <p class="empty-state-description">{description}</p>
            if props.has_filters {
                <button type="button" class="btn-outline" onclick={on_clear}>
                    {"Clear all filters"}
                </button>
            }
        </div>
    }
}
