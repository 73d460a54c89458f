// ============================================================================
// ROUTE CONTEXT - Ruta actual + navegación (pushState / popstate)
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::routes::Route;

#[derive(Clone, PartialEq)]
pub struct RouteHandle {
    pub route: Route,
    pub navigate: Callback<Route>,
}

#[derive(Properties, PartialEq)]
pub struct RouteProviderProps {
    pub children: Children,
}

#[function_component(RouteProvider)]
pub fn route_provider(props: &RouteProviderProps) -> Html {
    let route = use_state(Route::current);

    // Atrás / adelante del navegador
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                let next = Route::current();
                log::debug!("🧭 [ROUTE] popstate -> {:?}", next);
                route.set(next);
            }) as Box<dyn FnMut(web_sys::Event)>);

            let window = web_sys::window();
            if let Some(win) = &window {
                if let Err(e) = win.add_event_listener_with_callback(
                    "popstate",
                    listener.as_ref().unchecked_ref(),
                ) {
                    log::error!("❌ [ROUTE] No se pudo registrar popstate: {:?}", e);
                }
            }

            move || {
                if let Some(win) = window {
                    let _ = win.remove_event_listener_with_callback(
                        "popstate",
                        listener.as_ref().unchecked_ref(),
                    );
                }
                drop(listener);
            }
        });
    }

    let navigate = {
        let route = route.clone();
        Callback::from(move |next: Route| {
            log::debug!("🧭 [ROUTE] {:?} -> {:?}", *route, next);
            if let Err(e) = next.push() {
                log::error!("❌ [ROUTE] pushState falló: {:?}", e);
            }
            route.set(next);
        })
    };

    let handle = RouteHandle {
        route: *route,
        navigate,
    };

    html! {
        <ContextProvider<RouteHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<RouteHandle>>
    }
}

#[hook]
pub fn use_route() -> RouteHandle {
    use_context::<RouteHandle>().expect("use_route() fuera de <RouteProvider>")
}
