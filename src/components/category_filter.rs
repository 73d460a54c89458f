use yew::prelude::*;

use crate::hooks::use_store;
use crate::models::CATEGORY_TABS;

#[derive(Properties, PartialEq)]
pub struct CategoryFilterTabsProps {
    pub category: AttrValue,
}

#[function_component(CategoryFilterTabs)]
pub fn category_filter_tabs(props: &CategoryFilterTabsProps) -> Html {
    let store = use_store();

    html! {
        <div class="category-tabs" role="tablist">
            { for CATEGORY_TABS.iter().map(|tab| {
                let active = props.category.as_str() == tab.value;
                let onclick = {
                    let store = store.clone();
                    let value = tab.value;
                    Callback::from(move |_: MouseEvent| store.select_category(value))
                };
                html! {
                    <button
                        type="button"
                        role="tab"
                        class={classes!("tab", active.then_some("active"))}
                        aria-selected={active.to_string()}
                        {onclick}
                    >
                        {tab.label}
                    </button>
                }
            }) }
        </div>
    }
}
