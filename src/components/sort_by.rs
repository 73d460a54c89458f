use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::hooks::use_store;
use crate::models::SortOrder;

#[derive(Properties, PartialEq)]
pub struct SortByProps {
    pub sort: SortOrder,
}

#[function_component(SortBy)]
pub fn sort_by(props: &SortByProps) -> Html {
    let store = use_store();

    let onchange = Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        store.set_sort(SortOrder::from_option_value(&select.value()));
    });

    html! {
        <div class="sort-by">
            <select aria-label="Sort products" {onchange}>
                { for SortOrder::ALL.iter().map(|order| html! {
                    <option value={order.option_value()} selected={*order == props.sort}>
                        {order.label()}
                    </option>
                }) }
            </select>
        </div>
    }
}
