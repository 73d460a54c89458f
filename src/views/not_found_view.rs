use yew::prelude::*;

use crate::components::Link;
use crate::routes::Route;

#[function_component(NotFoundView)]
pub fn not_found_view() -> Html {
    html! {
        <div class="page not-found">
            <h1>{"Page not found"}</h1>
            <Link to={Route::Home} class="btn-outline">{"Go to products"}</Link>
        </div>
    }
}
