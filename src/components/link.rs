use yew::prelude::*;

use crate::hooks::use_route;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct LinkProps {
    pub to: Route,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// `<a>` que navega sin recargar la página
#[function_component(Link)]
pub fn link(props: &LinkProps) -> Html {
    let navigate = use_route().navigate;
    let to = props.to;

    let onclick = Callback::from(move |e: MouseEvent| {
        // Ctrl/Cmd/Shift-click o botón central: comportamiento nativo del navegador
        if e.ctrl_key() || e.meta_key() || e.shift_key() || e.button() != 0 {
            return;
        }
        e.prevent_default();
        navigate.emit(to);
    });

    html! {
        <a
            href={to.to_path()}
            class={props.class.clone()}
            aria-label={props.aria_label.clone()}
            title={props.title.clone()}
            {onclick}
        >
            {props.children.clone()}
        </a>
    }
}
